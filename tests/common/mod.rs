//! Shared fixtures for the integration tests.

#![allow(dead_code, unused_imports)]

use storefront::model::{Product, Size};
use storefront::mvi::Reducer;
use storefront::store::{StoreIntent, StoreReducer, StoreState};

pub fn shirt() -> Product {
    Product {
        id: "shirt".to_string(),
        caption: "Tee".to_string(),
        price_cents: 2000,
    }
}

pub fn hoodie() -> Product {
    Product {
        id: "hoodie".to_string(),
        caption: "Hoodie".to_string(),
        price_cents: 4500,
    }
}

pub fn catalog() -> Vec<Product> {
    vec![shirt(), hoodie()]
}

/// Runs a sequence of intents through the reducer.
pub fn reduce_all(state: StoreState, intents: impl IntoIterator<Item = StoreIntent>) -> StoreState {
    intents
        .into_iter()
        .fold(state, |s, intent| StoreReducer::reduce(s, intent))
}

/// Fresh Shopping state with the two-product catalog loaded.
pub fn shopping() -> StoreState {
    StoreReducer::reduce(StoreState::Welcome, StoreIntent::CatalogLoaded(catalog()))
}

/// Shopping state with one committed cart line: shirt, M, qty 2.
pub fn shopping_with_cart() -> StoreState {
    reduce_all(
        shopping(),
        [
            StoreIntent::SizeChosen {
                product: "shirt".to_string(),
                size: Size::M,
            },
            StoreIntent::QuantityChanged {
                product: "shirt".to_string(),
                direction: storefront::store::QuantityDirection::Up,
            },
            StoreIntent::AddToCart {
                product: "shirt".to_string(),
            },
        ],
    )
}
