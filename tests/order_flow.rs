mod common;

use common::{reduce_all, shopping, shopping_with_cart};
use std::time::Duration;
use storefront::model::{PaymentMethod, Size};
use storefront::mvi::Reducer;
use storefront::store::{
    order_for_submission, Page, StoreIntent, StoreReducer, StoreState,
};
use storefront::ui::app::App;

fn checkout_state() -> StoreState {
    reduce_all(
        shopping_with_cart(),
        [
            StoreIntent::Goto(Page::Checkout),
            StoreIntent::AddressEntered("1 Main St".to_string()),
        ],
    )
}

#[test]
fn submission_in_checkout_produces_order_snapshot() {
    let state = checkout_state();
    let order = order_for_submission(&state, &StoreIntent::OrderSubmitted(PaymentMethod::Bitcoin))
        .expect("order expected");
    assert_eq!(order.payment_method, PaymentMethod::Bitcoin);
    assert_eq!(order.street_address, "1 Main St");
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].product.id, "shirt");
    assert_eq!(order.lines[0].size, Size::M);
    assert_eq!(order.lines[0].quantity, 2);
}

#[test]
fn submission_outside_checkout_sends_nothing() {
    // OrderSubmitted while still in Shopping: precondition fails.
    let state = shopping_with_cart();
    assert!(
        order_for_submission(&state, &StoreIntent::OrderSubmitted(PaymentMethod::Card)).is_none()
    );
}

#[test]
fn non_submission_intents_never_produce_orders() {
    let state = checkout_state();
    assert!(order_for_submission(&state, &StoreIntent::ConfirmAcknowledged).is_none());
}

#[test]
fn submitted_intent_leaves_state_unchanged() {
    let before = checkout_state();
    let after = StoreReducer::reduce(
        before.clone(),
        StoreIntent::OrderSubmitted(PaymentMethod::Card),
    );
    assert_eq!(before, after);
}

#[test]
fn app_dispatch_hands_submitted_order_to_transport() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(Duration::from_millis(16), tx);

    app.dispatch(StoreIntent::CatalogLoaded(common::catalog()));
    app.dispatch(StoreIntent::SizeChosen {
        product: "shirt".to_string(),
        size: Size::M,
    });
    app.dispatch(StoreIntent::AddToCart {
        product: "shirt".to_string(),
    });
    app.dispatch(StoreIntent::Goto(Page::Checkout));
    app.dispatch(StoreIntent::AddressEntered("1 Main St".to_string()));

    // Nothing submitted yet.
    assert!(rx.try_recv().is_err());

    app.dispatch(StoreIntent::OrderSubmitted(PaymentMethod::Card));
    let order = rx.try_recv().expect("order reaches the transport");
    assert_eq!(order.payment_method, PaymentMethod::Card);
    assert_eq!(order.lines.len(), 1);
}

#[test]
fn app_dispatch_in_shopping_submits_nothing() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(Duration::from_millis(16), tx);
    app.dispatch(StoreIntent::CatalogLoaded(common::catalog()));
    app.dispatch(StoreIntent::OrderSubmitted(PaymentMethod::Bitcoin));
    assert!(rx.try_recv().is_err());
}

#[test]
fn full_bitcoin_round_trip() {
    let state = reduce_all(
        shopping(),
        [
            StoreIntent::SizeChosen {
                product: "shirt".to_string(),
                size: Size::M,
            },
            StoreIntent::AddToCart {
                product: "shirt".to_string(),
            },
            StoreIntent::Goto(Page::CartView),
            StoreIntent::Goto(Page::Checkout),
            StoreIntent::AddressEntered("1 Main St".to_string()),
            StoreIntent::OrderSubmitted(PaymentMethod::Bitcoin),
            StoreIntent::PaymentDetailsReceived {
                address: "bc1qxyz".to_string(),
                amount: 0.0042,
            },
            StoreIntent::OrderConfirmed {
                order_id: "ORD-7".to_string(),
            },
            StoreIntent::ConfirmAcknowledged,
        ],
    );
    match state {
        StoreState::Shopping { catalog, cart, .. } => {
            assert_eq!(catalog.len(), 2);
            assert!(cart.is_empty());
        }
        other => panic!("expected Shopping, got {other:?}"),
    }
}
