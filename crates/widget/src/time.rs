//! Timer backends.
pub use crate::core::time::{Sleep, Timer};

#[cfg(feature = "tokio")]
use std::time::Duration;

/// A [`Timer`] backed by the `tokio` runtime.
///
/// Requires a running `tokio` runtime with the time driver enabled.
#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokio;

#[cfg(feature = "tokio")]
impl Timer for Tokio {
    fn sleep(&self, duration: Duration) -> Sleep {
        Box::pin(tokio::time::sleep(duration))
    }
}
