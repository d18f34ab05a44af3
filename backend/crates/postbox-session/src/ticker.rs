use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Source of periodic refresh ticks for a session.
#[async_trait]
pub trait Ticker: Send {
    /// Resolves at the next tick. Must be cancel-safe for use in `select!`.
    async fn tick(&mut self);
}

pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// First tick fires one `period` from now, not immediately.
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }
}
