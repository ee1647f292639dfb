//! Terminal storefront client for the meetup store server.
//!
//! A visitor browses the catalog, picks size and quantity per product,
//! assembles a cart, and submits an order over a persistent WebSocket
//! connection. All state lives in one reducer-owned value; server
//! pushes and key presses merge into a single event stream, and every
//! event is followed by a coalesced re-render.

pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod net;
pub mod store;
pub mod ui;
pub mod wire;
