use serde::{Deserialize, Serialize};

use crate::model::cart::CartLine;

/// Payment methods offered at checkout. `Card` travels over the wire
/// as `"Credit"`, matching the server contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit")]
    Card,
    Bitcoin,
}

/// Snapshot of the cart taken at submission. Built once, handed to the
/// transport, and not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub payment_method: PaymentMethod,
    pub lines: Vec<CartLine>,
    pub street_address: String,
}
