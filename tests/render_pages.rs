mod common;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;
use storefront::model::{PaymentMethod, Size};
use storefront::store::{Page, StoreIntent};
use storefront::ui::app::App;
use storefront::ui::render::{draw, format_dollars};

fn app_with(intents: impl IntoIterator<Item = StoreIntent>) -> App {
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(Duration::from_millis(16), tx);
    for intent in intents {
        app.dispatch(intent);
    }
    app
}

fn rendered(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn rendering_is_pure_same_state_same_frame() {
    let app = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
        StoreIntent::SizeChosen {
            product: "shirt".to_string(),
            size: Size::M,
        },
    ]);
    assert_eq!(rendered(&app, 80, 24), rendered(&app, 80, 24));
}

#[test]
fn welcome_page_shows_greeting() {
    let app = app_with([]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("Welcome to the Bitcoin & Open Blockchain meetup store!"));
}

#[test]
fn browse_page_lists_products_and_prices() {
    let app = app_with([StoreIntent::CatalogLoaded(common::catalog())]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("Tee"));
    assert!(frame.contains("$20.00"));
    assert!(frame.contains("Hoodie"));
    assert!(frame.contains("$45.00"));
}

#[test]
fn add_hint_appears_only_for_complete_selections() {
    let before = app_with([StoreIntent::CatalogLoaded(common::catalog())]);
    assert!(!rendered(&before, 80, 24).contains("add to cart"));

    let after = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
        StoreIntent::SizeChosen {
            product: "shirt".to_string(),
            size: Size::M,
        },
    ]);
    assert!(rendered(&after, 80, 24).contains("add to cart"));
}

#[test]
fn cart_page_shows_line_and_total() {
    let app = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
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
        StoreIntent::Goto(Page::CartView),
    ]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("Shopping cart"));
    assert!(frame.contains("Tee"));
    assert!(frame.contains("$40.00"));
    assert!(frame.contains("Total: $40.00"));
}

#[test]
fn cart_page_footer_lists_every_mapped_key() {
    // Esc and 'o' are accepted alongside 'b' and Enter; the hint line
    // must advertise all of them.
    let app = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
        StoreIntent::Goto(Page::CartView),
    ]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("b/Esc: keep shopping"));
    assert!(frame.contains("Enter/o: checkout"));
}

#[test]
fn empty_cart_page_says_so() {
    let app = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
        StoreIntent::Goto(Page::CartView),
    ]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("No items"));
    assert!(frame.contains("Total: $0.00"));
}

#[test]
fn awaiting_payment_page_shows_quote() {
    let app = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
        StoreIntent::SizeChosen {
            product: "shirt".to_string(),
            size: Size::M,
        },
        StoreIntent::AddToCart {
            product: "shirt".to_string(),
        },
        StoreIntent::Goto(Page::Checkout),
        StoreIntent::OrderSubmitted(PaymentMethod::Bitcoin),
        StoreIntent::PaymentDetailsReceived {
            address: "bc1qxyz".to_string(),
            amount: 0.0042,
        },
    ]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("0.0042 BTC"));
    assert!(frame.contains("bc1qxyz"));
}

#[test]
fn confirmation_page_shows_order_id() {
    let app = app_with([
        StoreIntent::CatalogLoaded(common::catalog()),
        StoreIntent::SizeChosen {
            product: "shirt".to_string(),
            size: Size::M,
        },
        StoreIntent::AddToCart {
            product: "shirt".to_string(),
        },
        StoreIntent::Goto(Page::Checkout),
        StoreIntent::OrderConfirmed {
            order_id: "ORD-1".to_string(),
        },
    ]);
    let frame = rendered(&app, 80, 24);
    assert!(frame.contains("Success!"));
    assert!(frame.contains("Your order id is ORD-1"));
}

#[test]
fn tiny_terminal_renders_the_error_placeholder() {
    let app = app_with([StoreIntent::CatalogLoaded(common::catalog())]);
    let frame = rendered(&app, 20, 4);
    assert!(frame.contains("There is a problem."));
}

#[test]
fn dollars_formatting_pads_cents() {
    assert_eq!(format_dollars(2000), "$20.00");
    assert_eq!(format_dollars(5), "$0.05");
    assert_eq!(format_dollars(1999), "$19.99");
    assert_eq!(format_dollars(0), "$0.00");
}
