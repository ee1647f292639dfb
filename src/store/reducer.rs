use crate::model::{cart_key, catalog_from, Cart, CartLine, Selection};
use crate::mvi::Reducer;
use crate::store::intent::{QuantityDirection, StoreIntent};
use crate::store::state::{Page, Selections, ShoppingPage, StoreState};

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    /// Applies one event. Events whose precondition does not hold
    /// return the state unchanged: a stale render's key press racing a
    /// server transition is expected, not an error.
    fn reduce(state: StoreState, intent: StoreIntent) -> StoreState {
        match intent {
            StoreIntent::CatalogLoaded(products) => StoreState::Shopping {
                catalog: catalog_from(products),
                selections: Selections::new(),
                cart: Cart::new(),
                page: ShoppingPage::Browse,
            },

            StoreIntent::SizeChosen { product, size } => match state {
                StoreState::Shopping {
                    catalog,
                    mut selections,
                    cart,
                    page,
                } => {
                    if let Some(sel) = selections.get_mut(&product) {
                        sel.size = Some(size);
                    } else if let Some(p) = catalog.get(&product) {
                        selections.insert(
                            product,
                            Selection {
                                product: p.clone(),
                                size: Some(size),
                                quantity: 1,
                            },
                        );
                    }
                    StoreState::Shopping {
                        catalog,
                        selections,
                        cart,
                        page,
                    }
                }
                other => other,
            },

            StoreIntent::QuantityChanged { product, direction } => match state {
                StoreState::Shopping {
                    catalog,
                    mut selections,
                    cart,
                    page,
                } => {
                    if let Some(sel) = selections.get_mut(&product) {
                        sel.quantity = match direction {
                            QuantityDirection::Up => sel.quantity.saturating_add(1),
                            // Floors at zero; the selection stays pending.
                            QuantityDirection::Down => sel.quantity.saturating_sub(1),
                        };
                    }
                    StoreState::Shopping {
                        catalog,
                        selections,
                        cart,
                        page,
                    }
                }
                other => other,
            },

            StoreIntent::AddToCart { product } => match state {
                StoreState::Shopping {
                    catalog,
                    mut selections,
                    mut cart,
                    page,
                } => {
                    let complete = selections
                        .get(&product)
                        .is_some_and(Selection::is_complete);
                    if complete {
                        debug_assert!(
                            catalog.contains_key(&product),
                            "selection references product '{product}' missing from the catalog"
                        );
                        if let Some(sel) = selections.remove(&product) {
                            if let Some(size) = sel.size {
                                let key = cart_key(&product, size);
                                if let Some(line) = cart.get_mut(&key) {
                                    line.quantity = line.quantity.saturating_add(sel.quantity);
                                } else {
                                    cart.insert(
                                        key,
                                        CartLine {
                                            product: sel.product,
                                            size,
                                            quantity: sel.quantity,
                                        },
                                    );
                                }
                            }
                        }
                    }
                    StoreState::Shopping {
                        catalog,
                        selections,
                        cart,
                        page,
                    }
                }
                other => other,
            },

            StoreIntent::Goto(target) => goto(state, target),

            StoreIntent::AddressEntered(address) => match state {
                StoreState::Checkout {
                    catalog,
                    selections,
                    cart,
                    ..
                } => StoreState::Checkout {
                    catalog,
                    selections,
                    cart,
                    street_address: address,
                },
                other => other,
            },

            // Emitting the order is the transport's job (see
            // `order_for_submission`); the page only changes once the
            // server answers.
            StoreIntent::OrderSubmitted(_) => state,

            StoreIntent::PaymentDetailsReceived { address, amount } => match state {
                StoreState::Checkout { catalog, cart, .. } => StoreState::AwaitingPayment {
                    catalog,
                    cart,
                    payment_address: address,
                    amount_due: amount,
                },
                other => other,
            },

            StoreIntent::OrderConfirmed { order_id } => match state {
                StoreState::Checkout { catalog, cart, .. }
                | StoreState::AwaitingPayment { catalog, cart, .. } => StoreState::Confirmed {
                    catalog,
                    cart,
                    order_id,
                },
                other => other,
            },

            StoreIntent::ConfirmAcknowledged => match state {
                StoreState::Confirmed { catalog, .. } => StoreState::Shopping {
                    catalog,
                    selections: Selections::new(),
                    cart: Cart::new(),
                    page: ShoppingPage::Browse,
                },
                other => other,
            },
        }
    }
}

/// Page navigation. Only the page discriminant moves; catalog, cart,
/// and pending selections ride along untouched.
fn goto(state: StoreState, target: Page) -> StoreState {
    match (state, target) {
        (
            StoreState::Shopping {
                catalog,
                selections,
                cart,
                ..
            },
            Page::Browse,
        ) => StoreState::Shopping {
            catalog,
            selections,
            cart,
            page: ShoppingPage::Browse,
        },
        (
            StoreState::Shopping {
                catalog,
                selections,
                cart,
                ..
            },
            Page::CartView,
        ) => StoreState::Shopping {
            catalog,
            selections,
            cart,
            page: ShoppingPage::CartView,
        },
        (
            StoreState::Shopping {
                catalog,
                selections,
                cart,
                ..
            },
            Page::Checkout,
        ) if !cart.is_empty() => StoreState::Checkout {
            catalog,
            selections,
            cart,
            street_address: String::new(),
        },
        (
            StoreState::Checkout {
                catalog,
                selections,
                cart,
                ..
            },
            Page::Browse,
        ) => StoreState::Shopping {
            catalog,
            selections,
            cart,
            page: ShoppingPage::Browse,
        },
        (
            StoreState::Checkout {
                catalog,
                selections,
                cart,
                ..
            },
            Page::CartView,
        ) => StoreState::Shopping {
            catalog,
            selections,
            cart,
            page: ShoppingPage::CartView,
        },
        // Unreachable targets (empty-cart checkout, navigation out of
        // server-driven pages) are ignored.
        (other, _) => other,
    }
}
