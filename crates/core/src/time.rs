//! Wait for fixed amounts of time.
use futures::future::LocalBoxFuture;

use std::time::Duration;

/// A future that resolves once a [`Timer`] has elapsed.
pub type Sleep = LocalBoxFuture<'static, ()>;

/// A source of fixed-duration waits.
///
/// Implementations are expected to resolve the returned future once
/// `duration` has passed; hosts pick the clock (a runtime timer, a frame
/// clock, or a manual one in tests).
pub trait Timer {
    /// Returns a future that resolves after the given [`Duration`].
    fn sleep(&self, duration: Duration) -> Sleep;
}
