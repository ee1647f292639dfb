use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{PaymentMethod, ProductId, Size};
use crate::store::{Page, QuantityDirection, ShoppingPage, StoreIntent, StoreState};

/// What a key press turns into. Cursor movement is UI-local; anything
/// that touches store state becomes an intent for the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Quit,
    CursorUp,
    CursorDown,
    Dispatch(StoreIntent),
}

/// Pure key-to-action mapping, dispatched on the current page. Keys
/// with no meaning on the current page map to `None`; a press racing a
/// page transition simply produces an intent the reducer ignores.
pub fn map_key(state: &StoreState, focused: Option<&ProductId>, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl(key, 'q') || is_ctrl(key, 'c') {
        return InputAction::Quit;
    }

    match state {
        // Nothing to do until the catalog arrives, and payment is
        // entirely server-driven.
        StoreState::Welcome | StoreState::AwaitingPayment { .. } => InputAction::None,

        StoreState::Shopping {
            page: ShoppingPage::Browse,
            ..
        } => browse_key(focused, key),

        StoreState::Shopping {
            page: ShoppingPage::CartView,
            ..
        } => match key.code {
            KeyCode::Esc | KeyCode::Char('b') => InputAction::Dispatch(StoreIntent::Goto(Page::Browse)),
            KeyCode::Enter | KeyCode::Char('o') => {
                InputAction::Dispatch(StoreIntent::Goto(Page::Checkout))
            }
            _ => InputAction::None,
        },

        StoreState::Checkout { street_address, .. } => checkout_key(street_address, key),

        StoreState::Confirmed { .. } => match key.code {
            KeyCode::Enter => InputAction::Dispatch(StoreIntent::ConfirmAcknowledged),
            _ => InputAction::None,
        },
    }
}

fn browse_key(focused: Option<&ProductId>, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Up => return InputAction::CursorUp,
        KeyCode::Down => return InputAction::CursorDown,
        KeyCode::Char('c') => return InputAction::Dispatch(StoreIntent::Goto(Page::CartView)),
        _ => {}
    }

    // Everything below targets the focused product.
    let Some(product) = focused.cloned() else {
        return InputAction::None;
    };
    match key.code {
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'s') => {
            InputAction::Dispatch(StoreIntent::SizeChosen {
                product,
                size: Size::S,
            })
        }
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'m') => {
            InputAction::Dispatch(StoreIntent::SizeChosen {
                product,
                size: Size::M,
            })
        }
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'l') => {
            InputAction::Dispatch(StoreIntent::SizeChosen {
                product,
                size: Size::L,
            })
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            InputAction::Dispatch(StoreIntent::QuantityChanged {
                product,
                direction: QuantityDirection::Up,
            })
        }
        KeyCode::Char('-') => InputAction::Dispatch(StoreIntent::QuantityChanged {
            product,
            direction: QuantityDirection::Down,
        }),
        KeyCode::Enter => InputAction::Dispatch(StoreIntent::AddToCart { product }),
        _ => InputAction::None,
    }
}

/// Checkout owns the keyboard for address entry, so the only chords
/// are Enter (card), Ctrl+B (Bitcoin), and Esc (back to the cart).
fn checkout_key(street_address: &str, key: KeyEvent) -> InputAction {
    if is_ctrl(key, 'b') {
        return InputAction::Dispatch(StoreIntent::OrderSubmitted(PaymentMethod::Bitcoin));
    }
    match key.code {
        KeyCode::Esc => InputAction::Dispatch(StoreIntent::Goto(Page::CartView)),
        KeyCode::Enter => InputAction::Dispatch(StoreIntent::OrderSubmitted(PaymentMethod::Card)),
        KeyCode::Backspace => {
            let mut address = street_address.to_string();
            address.pop();
            InputAction::Dispatch(StoreIntent::AddressEntered(address))
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut address = street_address.to_string();
            address.push(c);
            InputAction::Dispatch(StoreIntent::AddressEntered(address))
        }
        _ => InputAction::None,
    }
}

fn is_ctrl(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
