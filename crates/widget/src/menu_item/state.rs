//! Hold the mutable state of a menu item.

use futures::channel::oneshot;

use super::attributes::Attributes;
use super::ripple::{Gesture, RippleHost};

/// A callback waiting for the trigger effects of an item to finish.
pub(crate) type Callback = Box<dyn FnOnce()>;

/// The mutable state behind a menu item.
#[derive(Default)]
pub(crate) struct State {
    pub(crate) attributes: Attributes,
    /// The tab index to restore once the item is enabled again
    pub(crate) saved_tab_index: Option<i32>,
    pub(crate) is_indicator_visible: bool,
    pub(crate) is_connected: bool,
    pub(crate) ripples: RippleHost,
    /// The gesture of the last pointer-down ripple, until that ripple is removed
    pub(crate) armed_gesture: Option<Gesture>,
    /// Number of blinks in flight
    pub(crate) blinks: usize,
    /// Set by the first blink and never cleared, when the quirk is preserved
    pub(crate) blink_latched: bool,
    pub(crate) pending: Vec<Callback>,
    pub(crate) capture_waiters: Vec<oneshot::Sender<()>>,
}

impl State {
    pub(crate) fn is_blinking(&self) -> bool {
        self.blinks > 0 || self.blink_latched
    }

    /// Whether a completion query can resolve right away.
    pub(crate) fn is_idle(&self) -> bool {
        self.ripples.is_empty() && !self.is_blinking()
    }
}
