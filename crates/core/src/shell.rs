use crate::event;

use futures::future::LocalBoxFuture;

use std::fmt;

/// A deferred piece of work produced while handling an event.
///
/// Effects hold the suspended part of a trigger effect (waiting on
/// animations, pointer capture or timers) and must be driven by the host on a
/// local executor.
pub type Effect = LocalBoxFuture<'static, ()>;

/// A connection to the state of a shell.
///
/// A menu control leverages a [`Shell`] to report how it handled an event
/// (whether it stopped propagation or suppressed the default action) and to
/// hand over the [`Effect`]s the host has to drive.
pub struct Shell<'a> {
    effects: &'a mut Vec<Effect>,
    event_status: event::Status,
    is_default_prevented: bool,
}

impl fmt::Debug for Shell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("effects", &self.effects.len())
            .field("event_status", &self.event_status)
            .field("is_default_prevented", &self.is_default_prevented)
            .finish()
    }
}

impl<'a> Shell<'a> {
    /// Creates a new [`Shell`] with the provided buffer of effects.
    pub fn new(effects: &'a mut Vec<Effect>) -> Self {
        Self {
            effects,
            event_status: event::Status::Ignored,
            is_default_prevented: false,
        }
    }

    /// Returns true if the [`Shell`] contains no spawned effects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Hands over an [`Effect`] for the host to drive.
    pub fn spawn(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Marks the current event as captured. Prevents "event bubbling".
    ///
    /// A widget should capture an event when no ancestor should
    /// handle it.
    pub fn capture_event(&mut self) {
        self.event_status = event::Status::Captured;
    }

    /// Returns the current [`event::Status`] of the [`Shell`].
    #[must_use]
    pub fn event_status(&self) -> event::Status {
        self.event_status
    }

    /// Returns whether the current event has been captured.
    #[must_use]
    pub fn is_event_captured(&self) -> bool {
        self.event_status == event::Status::Captured
    }

    /// Resets the event status to [`event::Status::Ignored`].
    ///
    /// This is useful when you need to simulate multiple events in sequence
    /// and want each event to be processed independently.
    pub fn uncapture_event(&mut self) {
        self.event_status = event::Status::Ignored;
    }

    /// Suppresses the default action of the current event.
    pub fn prevent_default(&mut self) {
        self.is_default_prevented = true;
    }

    /// Returns whether the default action of the current event was suppressed.
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.is_default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_tracks_status_and_effects() {
        let mut effects = Vec::new();
        let mut shell = Shell::new(&mut effects);

        assert!(shell.is_empty());
        assert!(!shell.is_event_captured());
        assert!(!shell.is_default_prevented());

        shell.capture_event();
        shell.prevent_default();
        shell.spawn(Box::pin(async {}));

        assert!(!shell.is_empty());
        assert_eq!(shell.event_status(), event::Status::Captured);
        assert!(shell.is_default_prevented());

        shell.uncapture_event();
        assert!(!shell.is_event_captured());

        assert_eq!(effects.len(), 1);
    }
}
