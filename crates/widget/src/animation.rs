//! Drive transitions without a renderer.
use crate::core::animation::{Animation, Animator, Transition};
use crate::core::time::Timer;

/// An [`Animator`] that completes every [`Transition`] once its duration has
/// elapsed on a [`Timer`].
///
/// Useful for hosts that interpolate the drawn state themselves and only need
/// the item to observe the completion of each transition.
#[derive(Debug, Clone)]
pub struct Delay<T> {
    timer: T,
}

impl<T: Timer> Delay<T> {
    /// Creates a new [`Delay`] animator backed by `timer`.
    pub fn new(timer: T) -> Self {
        Self { timer }
    }
}

impl<T: Timer> Animator for Delay<T> {
    fn animate(&self, transition: Transition) -> Animation {
        log::trace!("animating {transition:?}");

        self.timer.sleep(transition.duration)
    }
}
