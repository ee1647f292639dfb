//! The storefront state machine: one closed state type per page, one
//! intent type per event, one pure reducer.

mod intent;
mod reducer;
mod state;
mod submit;

pub use intent::{QuantityDirection, StoreIntent};
pub use reducer::StoreReducer;
pub use state::{Page, Selections, ShoppingPage, StoreState};
pub use submit::order_for_submission;
