use crate::{CooldownConfig, SendCooldown};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use governor::clock::{Clock, DefaultClock, Reference};
use log::debug;

/// Mutex-guarded map of identity to last send instant.
///
/// Entries are never purged, so memory grows with the number of distinct
/// identities that have ever sent.
pub struct CooldownTracker<C: Clock = DefaultClock> {
    last_sent: Mutex<HashMap<String, C::Instant>>,
    window: Duration,
    clock: C,
}

impl CooldownTracker<DefaultClock> {
    pub fn new(config: CooldownConfig) -> Self {
        Self::with_clock(config, DefaultClock::default())
    }
}

impl<C: Clock> CooldownTracker<C> {
    pub fn with_clock(config: CooldownConfig, clock: C) -> Self {
        Self {
            last_sent: Mutex::new(HashMap::new()),
            window: config.window(),
            clock,
        }
    }

    pub fn tracked_identities(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, C::Instant>> {
        // Values are plain instants, a panic mid-insert cannot corrupt them
        self.last_sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn elapsed_since(&self, earlier: C::Instant) -> Duration {
        Duration::from(self.clock.now().duration_since(earlier))
    }
}

impl<C> SendCooldown for CooldownTracker<C>
where
    C: Clock + Send + Sync,
    C::Instant: Send,
{
    fn can_send(&self, identity: &str) -> bool {
        match self.entries().get(identity) {
            Some(last) => self.elapsed_since(*last) >= self.window,
            None => true,
        }
    }

    fn record_send(&self, identity: &str) {
        let now = self.clock.now();
        self.entries().insert(identity.to_string(), now);
        debug!("Recorded send for {}", identity);
    }

    fn remaining(&self, identity: &str) -> Duration {
        match self.entries().get(identity) {
            Some(last) => self.window.saturating_sub(self.elapsed_since(*last)),
            None => Duration::ZERO,
        }
    }

    fn window(&self) -> Duration {
        self.window
    }
}
