use crate::model::Order;
use crate::store::intent::StoreIntent;
use crate::store::state::StoreState;

/// The one reducer-adjacent side effect: deciding whether an intent
/// puts an order on the wire. Lives outside the reducer so the
/// transition function stays pure; the dispatch loop calls this before
/// reducing and hands any order to the transport.
///
/// Returns `Some` only for `OrderSubmitted` in Checkout with a
/// non-empty cart; everywhere else the intent is a stale click and no
/// message is sent.
pub fn order_for_submission(state: &StoreState, intent: &StoreIntent) -> Option<Order> {
    let StoreIntent::OrderSubmitted(method) = intent else {
        return None;
    };
    let StoreState::Checkout {
        cart,
        street_address,
        ..
    } = state
    else {
        return None;
    };
    if cart.is_empty() {
        return None;
    }
    Some(Order {
        payment_method: *method,
        lines: cart.values().cloned().collect(),
        street_address: street_address.clone(),
    })
}
