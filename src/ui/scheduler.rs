use std::time::{Duration, Instant};

/// Coalesces render requests: any number of events between frames
/// produces one draw, and a pending request is never dropped — at
/// worst it is delayed until the frame interval elapses.
#[derive(Debug)]
pub struct RenderScheduler {
    pending: bool,
    min_interval: Duration,
    last_render: Option<Instant>,
}

impl RenderScheduler {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            pending: false,
            min_interval,
            last_render: None,
        }
    }

    /// Marks a render as wanted. Idempotent between draws.
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True when a draw should happen now; consumes the pending flag
    /// and stamps the frame time.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        if let Some(last) = self.last_render {
            if now.duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.pending = false;
        self.last_render = Some(now);
        true
    }

    /// Time until the pending render becomes due; bounds how long the
    /// event loop may block waiting for input. `None` when nothing is
    /// pending.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        if !self.pending {
            return None;
        }
        match self.last_render {
            None => Some(Duration::ZERO),
            Some(last) => Some(
                self.min_interval
                    .saturating_sub(now.duration_since(last)),
            ),
        }
    }
}
