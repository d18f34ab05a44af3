use std::time::Duration;

/// Process-wide per-identity send cooldown, shared by every session.
///
/// Implementations must make each call atomic per identity so two sessions
/// of the same identity cannot lose an update.
///
/// `can_send` followed by `record_send` is not atomic as a pair. Two sessions
/// of one identity that both check before either records can both send once
/// inside the same window.
pub trait SendCooldown: Send + Sync {
    /// True if `identity` never sent, or the cooldown window has elapsed
    /// since its last recorded send.
    fn can_send(&self, identity: &str) -> bool;

    /// Stamp the current time as the last send of `identity`.
    fn record_send(&self, identity: &str);

    /// Time left before `can_send` turns true; zero when it already is.
    fn remaining(&self, identity: &str) -> Duration;

    /// Length of the cooldown window.
    fn window(&self) -> Duration;
}
