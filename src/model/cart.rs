use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::product::{Product, ProductId, Size};

/// A visitor's in-progress size/quantity choice for one product.
/// At most one exists per product; it is deleted the moment it is
/// committed into the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub product: Product,
    pub size: Option<Size>,
    /// May legitimately reach 0 via the down button; only commit
    /// requires it to be positive.
    pub quantity: u32,
}

impl Selection {
    /// Only complete selections may be committed to the cart.
    pub fn is_complete(&self) -> bool {
        self.size.is_some() && self.quantity > 0
    }
}

/// A committed (product, size) pair with an aggregated quantity.
/// Quantity is always > 0 once a line exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub size: Size,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.product.price_cents)
    }
}

/// Committed lines keyed by [`cart_key`]. Ordered so cart rendering
/// and order construction are deterministic.
pub type Cart = BTreeMap<String, CartLine>;

/// Two lines for the same product in different sizes are distinct;
/// committing a selection whose key already exists merges quantities.
pub fn cart_key(product: &ProductId, size: Size) -> String {
    format!("{product}:{size}")
}

pub fn cart_total_cents(cart: &Cart) -> u64 {
    cart.values().map(CartLine::line_total_cents).sum()
}

/// Total number of units across all lines, for the "View cart (n)" nav.
pub fn cart_unit_count(cart: &Cart) -> u32 {
    cart.values().map(|line| line.quantity).sum()
}
