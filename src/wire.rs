//! JSON wire contract with the store server.
//!
//! Messages are tagged with a `__ctor` field. Inbound shapes map 1:1
//! onto intents; anything that fails to decode is dropped so the
//! client survives server-side message evolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{CartLine, Order, PaymentMethod, Product};
use crate::store::StoreIntent;

/// Everything the server can push at us.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__ctor")]
pub enum ServerMessage {
    Products { data: Vec<Product> },
    PaymentDetails {
        address: String,
        /// BTC amount, as quoted. Not cents.
        amount: f64,
    },
    Confirmation {
        #[serde(rename = "orderId")]
        order_id: String,
    },
}

impl ServerMessage {
    pub fn into_intent(self) -> StoreIntent {
        match self {
            ServerMessage::Products { data } => StoreIntent::CatalogLoaded(data),
            ServerMessage::PaymentDetails { address, amount } => {
                StoreIntent::PaymentDetailsReceived { address, amount }
            }
            ServerMessage::Confirmation { order_id } => StoreIntent::OrderConfirmed { order_id },
        }
    }
}

/// Everything we send. Only the order snapshot today.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__ctor")]
pub enum ClientMessage {
    Order {
        #[serde(rename = "paymentMethod")]
        payment_method: PaymentMethod,
        selections: Vec<CartLine>,
        #[serde(rename = "streetAddress")]
        street_address: String,
    },
}

impl From<Order> for ClientMessage {
    fn from(order: Order) -> Self {
        ClientMessage::Order {
            payment_method: order.payment_method,
            selections: order.lines,
            street_address: order.street_address,
        }
    }
}

/// Decodes one inbound frame into an intent. Unrecognized shapes are
/// dropped with a debug log and produce no event.
pub fn decode(raw: &str) -> Option<StoreIntent> {
    match serde_json::from_str::<ServerMessage>(raw) {
        Ok(msg) => Some(msg.into_intent()),
        Err(err) => {
            debug!(%err, "dropping unrecognized server message");
            None
        }
    }
}

pub fn encode_order(order: Order) -> serde_json::Result<String> {
    serde_json::to_string(&ClientMessage::from(order))
}
