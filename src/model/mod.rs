//! Domain data model: catalog products, in-progress selections,
//! committed cart lines, and the order snapshot sent to the server.

mod cart;
mod order;
mod product;

pub use cart::{cart_key, cart_total_cents, cart_unit_count, Cart, CartLine, Selection};
pub use order::{Order, PaymentMethod};
pub use product::{catalog_from, Catalog, Product, ProductId, Size};
