use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type ProductId = String;

/// One catalog entry. Immutable once loaded; the whole catalog is
/// replaced on the next server push, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub caption: String,
    /// Integer cents. Conversion to dollars happens at render time
    /// only; stored values stay in cents.
    #[serde(rename = "price")]
    pub price_cents: u32,
}

/// Catalog keyed by product id. BTreeMap so the store page lists
/// products in a stable order.
pub type Catalog = BTreeMap<ProductId, Product>;

pub fn catalog_from(products: Vec<Product>) -> Catalog {
    products.into_iter().map(|p| (p.id.clone(), p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::S => write!(f, "S"),
            Size::M => write!(f, "M"),
            Size::L => write!(f, "L"),
        }
    }
}
