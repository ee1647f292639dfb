use std::collections::BTreeMap;

use crate::model::{Cart, Catalog, ProductId, Selection};
use crate::mvi::UiState;

/// Pending selections, at most one per product.
pub type Selections = BTreeMap<ProductId, Selection>;

/// Sub-page of the Shopping variant: the product grid or the cart
/// review. Navigating between them touches nothing but this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShoppingPage {
    #[default]
    Browse,
    CartView,
}

/// Navigation targets a visitor can request directly. Server-driven
/// pages (AwaitingPayment, Confirmed) are not reachable via Goto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Browse,
    CartView,
    Checkout,
}

/// The single view state. Exactly one variant is active at a time and
/// each carries only what its page needs; the catalog rides through
/// the checkout variants so confirmation can hand it back to Shopping.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StoreState {
    /// Before the first catalog push arrives.
    #[default]
    Welcome,
    Shopping {
        catalog: Catalog,
        selections: Selections,
        cart: Cart,
        page: ShoppingPage,
    },
    Checkout {
        catalog: Catalog,
        /// Carried through untouched so backing out of checkout
        /// restores the grid exactly as it was left.
        selections: Selections,
        cart: Cart,
        street_address: String,
    },
    /// Bitcoin flow only: the server has quoted payment details and
    /// the client waits for on-chain confirmation.
    AwaitingPayment {
        catalog: Catalog,
        cart: Cart,
        payment_address: String,
        /// BTC amount quoted by the server, not cents.
        amount_due: f64,
    },
    Confirmed {
        catalog: Catalog,
        cart: Cart,
        order_id: String,
    },
}

impl UiState for StoreState {}

impl StoreState {
    pub fn cart(&self) -> Option<&Cart> {
        match self {
            StoreState::Welcome => None,
            StoreState::Shopping { cart, .. }
            | StoreState::Checkout { cart, .. }
            | StoreState::AwaitingPayment { cart, .. }
            | StoreState::Confirmed { cart, .. } => Some(cart),
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            StoreState::Welcome => None,
            StoreState::Shopping { catalog, .. }
            | StoreState::Checkout { catalog, .. }
            | StoreState::AwaitingPayment { catalog, .. }
            | StoreState::Confirmed { catalog, .. } => Some(catalog),
        }
    }
}
