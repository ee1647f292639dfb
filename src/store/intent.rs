use crate::model::{PaymentMethod, Product, ProductId, Size};
use crate::mvi::Intent;
use crate::store::state::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityDirection {
    Up,
    Down,
}

/// Every event the storefront reacts to: decoded server pushes and
/// user interactions alike. One variant per event; the reducer is
/// total over all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    /// Server pushed a catalog. Replaces any previous one wholesale.
    CatalogLoaded(Vec<Product>),
    SizeChosen { product: ProductId, size: Size },
    QuantityChanged {
        product: ProductId,
        direction: QuantityDirection,
    },
    /// Commit the product's selection into the cart.
    AddToCart { product: ProductId },
    Goto(Page),
    /// Full replacement of the delivery address text.
    AddressEntered(String),
    /// Submission itself does not transition state; the server
    /// round-trip drives the next page.
    OrderSubmitted(PaymentMethod),
    PaymentDetailsReceived { address: String, amount: f64 },
    OrderConfirmed { order_id: String },
    /// Visitor dismissed the confirmation page.
    ConfirmAcknowledged,
}

impl Intent for StoreIntent {}
