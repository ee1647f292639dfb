use std::time::{Duration, Instant};
use tracing::{trace, warn};

use crate::model::ProductId;
use crate::mvi::Reducer;
use crate::net::{NetStatus, OrderSink};
use crate::store::{order_for_submission, StoreIntent, StoreReducer, StoreState};
use crate::ui::scheduler::RenderScheduler;

/// The application context: the one owner of the store state, plus the
/// UI-local browse cursor, the render scheduler, and the handle used
/// to hand submitted orders to the transport. Constructed at startup,
/// dropped on exit; nothing else holds mutable state.
pub struct App {
    state: StoreState,
    /// Focused row on the browse page. Purely a UI concern: it selects
    /// which product a key press targets, so it stays out of the
    /// reducer.
    cursor: usize,
    scheduler: RenderScheduler,
    orders: OrderSink,
    net: NetStatus,
    should_quit: bool,
}

impl App {
    pub fn new(frame_interval: Duration, orders: OrderSink) -> Self {
        let mut scheduler = RenderScheduler::new(frame_interval);
        // First paint before any event arrives.
        scheduler.request();
        Self {
            state: StoreState::default(),
            cursor: 0,
            scheduler,
            orders,
            net: NetStatus::Connecting,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Runs one event through the reducer and schedules a render.
    /// Order submission is decided against the pre-reduce state and
    /// handed to the transport here — the reducer itself stays pure.
    pub fn dispatch(&mut self, intent: StoreIntent) {
        trace!(?intent, "dispatch");
        if let Some(order) = order_for_submission(&self.state, &intent) {
            if self.orders.send(order).is_err() {
                warn!("Transport is gone; order not sent");
            }
        }
        self.state = StoreReducer::reduce(std::mem::take(&mut self.state), intent);
        self.clamp_cursor();
        self.scheduler.request();
    }

    /// Id of the product the browse cursor sits on.
    pub fn focused_product(&self) -> Option<&ProductId> {
        self.state
            .catalog()
            .and_then(|catalog| catalog.keys().nth(self.cursor))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let len = self.state.catalog().map_or(0, |c| c.len());
        if len == 0 {
            return;
        }
        let max = len as i64 - 1;
        self.cursor = (self.cursor as i64 + delta).clamp(0, max) as usize;
        self.scheduler.request();
    }

    fn clamp_cursor(&mut self) {
        let len = self.state.catalog().map_or(0, |c| c.len());
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn net_status(&self) -> NetStatus {
        self.net
    }

    pub fn set_net_status(&mut self, status: NetStatus) {
        if self.net != status {
            self.net = status;
            self.scheduler.request();
        }
    }

    pub fn request_render(&mut self) {
        self.scheduler.request();
    }

    pub fn render_due(&mut self, now: Instant) -> bool {
        self.scheduler.take_due(now)
    }

    pub fn render_deadline(&self, now: Instant) -> Option<Duration> {
        self.scheduler.next_deadline(now)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
