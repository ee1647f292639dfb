//! WebSocket transport adapter.
//!
//! Bridges the store server connection onto the app's single event
//! channel: inbound frames are decoded into intents (unknown shapes
//! dropped), outbound orders are serialized and sent. The connection
//! runs on its own single-thread tokio runtime so the UI loop stays
//! synchronous. Reconnection uses exponential backoff; the core never
//! sees a connection error, only a status change in the footer.

use futures_util::{SinkExt, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Notify};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::model::Order;
use crate::ui::events::AppEvent;
use crate::wire;

/// Connection state, surfaced in the UI footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetStatus {
    Connecting,
    Connected,
    Disconnected,
}

impl std::fmt::Display for NetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetStatus::Connecting => write!(f, "connecting"),
            NetStatus::Connected => write!(f, "connected"),
            NetStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

#[derive(Debug, Error)]
pub enum NetError {
    #[error("Failed to start transport runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Handle for submitting orders from the UI thread.
pub type OrderSink = mpsc::UnboundedSender<Order>;

/// Stop flag the connection loop can await, so shutdown interrupts a
/// backoff sleep or a pending connect instead of waiting it out.
#[derive(Clone)]
struct StopSignal {
    stopped: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            wake: Arc::new(Notify::new()),
        }
    }

    fn signal(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            self.wake.notify_waiters();
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, signal() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the notification.
        let notified = self.wake.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_stopped() {
            return;
        }
        notified.await;
    }
}

/// Owns the transport thread. `shutdown` interrupts whatever the loop
/// is doing (connecting, pumping a session, sleeping out a backoff)
/// and joins the thread.
pub struct Transport {
    orders: OrderSink,
    stop: StopSignal,
    join: Option<thread::JoinHandle<()>>,
}

impl Transport {
    /// Spawns the connection thread. Decoded server events are pushed
    /// into `events`; orders submitted via [`Transport::orders`] go out
    /// on the socket.
    pub fn spawn(config: ServerConfig, events: Sender<AppEvent>) -> Result<Self, NetError> {
        let (order_tx, order_rx) = mpsc::unbounded_channel();
        let stop = StopSignal::new();
        let stop_loop = stop.clone();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(NetError::Runtime)?;

        let join = thread::Builder::new()
            .name("transport".to_string())
            .spawn(move || {
                runtime.block_on(client_loop(config, events, order_rx, stop_loop));
            })
            .map_err(NetError::Runtime)?;

        Ok(Transport {
            orders: order_tx,
            stop,
            join: Some(join),
        })
    }

    pub fn orders(&self) -> OrderSink {
        self.orders.clone()
    }

    /// Stops the connection loop and waits for the thread to finish.
    /// Returns promptly even mid-backoff or mid-connect.
    pub fn shutdown(mut self) {
        self.stop.signal();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connect-session-backoff cycle until shutdown.
async fn client_loop(
    config: ServerConfig,
    events: Sender<AppEvent>,
    mut orders: mpsc::UnboundedReceiver<Order>,
    stop: StopSignal,
) {
    let mut backoff = config.initial_backoff();

    while !stop.is_stopped() {
        let _ = events.send(AppEvent::Net(NetStatus::Connecting));

        tokio::select! {
            result = timeout(config.connect_timeout(), connect_async(config.url.as_str())) => match result {
                Ok(Ok((ws, response))) => {
                    debug!(status = ?response.status(), "WebSocket handshake complete");
                    info!(url = %config.url, "Connected to store server");
                    let _ = events.send(AppEvent::Net(NetStatus::Connected));
                    backoff = config.initial_backoff();
                    run_session(ws, &events, &mut orders, &stop).await;
                    let _ = events.send(AppEvent::Net(NetStatus::Disconnected));
                }
                Ok(Err(err)) => {
                    warn!(%err, "Connection failed");
                    let _ = events.send(AppEvent::Net(NetStatus::Disconnected));
                }
                Err(_) => {
                    warn!(secs = config.connect_timeout().as_secs(), "Connect timed out");
                    let _ = events.send(AppEvent::Net(NetStatus::Disconnected));
                }
            },
            _ = stop.wait() => break,
        }

        if stop.is_stopped() {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep(backoff) => {}
            _ = stop.wait() => break,
        }
        backoff = (backoff * 2).min(config.max_backoff());
    }
}

/// Pumps one live connection. Returns when the socket closes, errors,
/// or shutdown is requested.
async fn run_session(
    ws: WsStream,
    events: &Sender<AppEvent>,
    orders: &mut mpsc::UnboundedReceiver<Order>,
    stop: &StopSignal,
) {
    let (mut sink, mut stream) = ws.split();

    loop {
        tokio::select! {
            frame = stream.next() => match frame {
                Some(Ok(WsMessage::Text(text))) => {
                    if let Some(intent) = wire::decode(text.as_str()) {
                        if events.send(AppEvent::Server(intent)).is_err() {
                            return;
                        }
                    }
                }
                Some(Ok(WsMessage::Ping(data))) => {
                    if sink.send(WsMessage::Pong(data)).await.is_err() {
                        return;
                    }
                }
                Some(Ok(WsMessage::Close(frame))) => {
                    info!(?frame, "Server closed the connection");
                    return;
                }
                Some(Ok(_)) => {
                    // Binary, pong, raw frames: nothing for us.
                }
                Some(Err(err)) => {
                    warn!(%err, "WebSocket error");
                    return;
                }
                None => return,
            },
            order = orders.recv() => match order {
                Some(order) => match wire::encode_order(order) {
                    Ok(json) => {
                        debug!("Sending order");
                        if sink.send(WsMessage::Text(json.into())).await.is_err() {
                            return;
                        }
                    }
                    Err(err) => warn!(%err, "Failed to serialize order"),
                },
                None => {
                    let _ = sink.send(WsMessage::Close(None)).await;
                    return;
                }
            },
            _ = stop.wait() => {
                let _ = sink.send(WsMessage::Close(None)).await;
                return;
            }
        }
    }
}
