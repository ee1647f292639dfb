//! Projects the store state into a widget tree. Pure: the same state
//! renders the same frame, every time; money is converted from cents
//! to dollars here and only here.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::model::{cart_total_cents, cart_unit_count, Cart, Catalog, Size};
use crate::store::{Selections, ShoppingPage, StoreState};
use crate::ui::app::App;
use crate::ui::layout::{layout_regions, MIN_HEIGHT, MIN_WIDTH};
use crate::ui::theme::{DIM, FOCUS_ROW, HEADER_TEXT, SELECTED, STATUS_ERROR, STATUS_OK, TITLE};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        // Never a blank or mangled display: a fixed placeholder.
        frame.render_widget(problem(), area);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(app), body);
    frame.render_widget(footer_widget(app.state()), footer);
}

/// Integer cents to display dollars. Never applied to stored values.
pub fn format_dollars(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let cart_count = app.state().cart().map_or(0, cart_unit_count);
    let status_color = match app.net_status() {
        crate::net::NetStatus::Connected => STATUS_OK,
        _ => STATUS_ERROR,
    };
    let line = Line::from(vec![
        Span::styled(
            "Bitcoin & Open Blockchain Store",
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ·  cart ({cart_count})"), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("  ·  {}", app.net_status()),
            Style::default().fg(status_color),
        ),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL))
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let lines = match app.state() {
        StoreState::Welcome => welcome_lines(),
        StoreState::Shopping {
            catalog,
            selections,
            page: ShoppingPage::Browse,
            ..
        } => browse_lines(catalog, selections, app.cursor()),
        StoreState::Shopping {
            cart,
            page: ShoppingPage::CartView,
            ..
        } => cart_lines(cart),
        StoreState::Checkout {
            cart,
            street_address,
            ..
        } => checkout_lines(cart, street_address),
        StoreState::AwaitingPayment {
            payment_address,
            amount_due,
            ..
        } => awaiting_lines(payment_address, *amount_due),
        StoreState::Confirmed { cart, order_id, .. } => confirmed_lines(cart, order_id),
    };
    Paragraph::new(lines).block(Block::default().borders(Borders::ALL))
}

fn welcome_lines() -> Vec<Line<'static>> {
    vec![
        Line::from("Welcome to the Bitcoin & Open Blockchain meetup store!"),
        Line::from(""),
        Line::from(Span::styled(
            "Waiting for the catalog...",
            Style::default().fg(DIM),
        )),
    ]
}

fn browse_lines(catalog: &Catalog, selections: &Selections, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if catalog.is_empty() {
        lines.push(Line::from("The catalog is empty."));
        return lines;
    }

    for (idx, product) in catalog.values().enumerate() {
        let focused = idx == cursor;
        let marker = if focused { "> " } else { "  " };
        let mut caption_line = Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(
                product.caption.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format_dollars(u64::from(product.price_cents))),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);
        if focused {
            caption_line = caption_line.style(Style::default().bg(FOCUS_ROW));
        }
        lines.push(caption_line);

        let selection = selections.get(&product.id);

        let mut size_spans = vec![Span::styled("    Size: ", Style::default().fg(DIM))];
        for size in Size::ALL {
            let chosen = selection.is_some_and(|sel| sel.size == Some(size));
            let style = if chosen {
                Style::default().fg(SELECTED).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            size_spans.push(Span::styled(format!("[{size}] "), style));
        }
        lines.push(Line::from(size_spans));

        let quantity = selection.map_or(0, |sel| sel.quantity);
        lines.push(Line::from(vec![
            Span::styled("    Qty:  ", Style::default().fg(DIM)),
            Span::styled(format!("(-) {quantity} (+)"), Style::default().fg(HEADER_TEXT)),
        ]));

        if selection.is_some_and(|sel| sel.is_complete()) {
            lines.push(Line::from(Span::styled(
                "    Enter: add to cart",
                Style::default().fg(SELECTED),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn cart_lines(cart: &Cart) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Shopping cart",
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{:<16} {:<4} {:>3}  {:>9}", "Desc", "Size", "Qty", "Price"),
            Style::default().fg(DIM),
        )),
    ];

    if cart.is_empty() {
        lines.push(Line::from("No items"));
    } else {
        for line in cart.values() {
            lines.push(Line::from(format!(
                "{:<16} {:<4} {:>3}  {:>9}",
                line.product.caption,
                line.size.to_string(),
                line.quantity,
                format_dollars(line.line_total_cents()),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Total: {}", format_dollars(cart_total_cents(cart))),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines
}

fn checkout_lines(cart: &Cart, street_address: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Checkout",
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Order total: {}",
            format_dollars(cart_total_cents(cart))
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Street address: ", Style::default().fg(DIM)),
            Span::raw(street_address.to_string()),
            Span::styled("_", Style::default().fg(SELECTED)),
        ]),
    ]
}

fn awaiting_lines(payment_address: &str, amount_due: f64) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Bitcoin payment",
            Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Please send {amount_due} BTC to {payment_address} to complete your order."
        )),
    ]
}

fn confirmed_lines(cart: &Cart, order_id: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Success!",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Your order id is {order_id}")),
        Line::from(""),
    ];
    for line in cart.values() {
        lines.push(Line::from(format!(
            "{:<16} {:<4} {:>3}",
            line.product.caption,
            line.size.to_string(),
            line.quantity,
        )));
    }
    lines
}

fn problem() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "There is a problem.",
        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
    )))
}

fn footer_widget(state: &StoreState) -> Paragraph<'static> {
    let hints = match state {
        StoreState::Welcome => "Ctrl+Q: quit",
        StoreState::Shopping {
            page: ShoppingPage::Browse,
            ..
        } => "Up/Down: focus  s/m/l: size  +/-: qty  Enter: add  c: cart  Ctrl+Q: quit",
        StoreState::Shopping {
            page: ShoppingPage::CartView,
            ..
        } => "b/Esc: keep shopping  Enter/o: checkout  Ctrl+Q: quit",
        StoreState::Checkout { .. } => {
            "type address  Enter: pay with card  Ctrl+B: pay with Bitcoin  Esc: back"
        }
        StoreState::AwaitingPayment { .. } => "waiting for payment confirmation",
        StoreState::Confirmed { .. } => "Enter: continue shopping",
    };
    Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(DIM))))
        .block(Block::default().borders(Borders::ALL))
}
