//! Handle pointer events.
use crate::Point;
use crate::document::NodeId;

use bitflags::bitflags;

bitflags! {
    /// The set of buttons held down while a pointer event was produced.
    ///
    /// Mirrors the `buttons` bitmask of pointer events: bit 0 is the
    /// primary button, bit 1 the secondary one, bit 2 the auxiliary one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        /// The primary button (usually the left one).
        const PRIMARY = 1;
        /// The secondary button (usually the right one).
        const SECONDARY = 1 << 1;
        /// The auxiliary button (usually the wheel).
        const AUXILIARY = 1 << 2;
        /// The "browser back" button.
        const BACK = 1 << 3;
        /// The "browser forward" button.
        const FORWARD = 1 << 4;
    }
}

impl Buttons {
    /// Returns true if the primary button bit is set.
    pub fn is_primary(self) -> bool {
        self.contains(Buttons::PRIMARY)
    }
}

/// The button that triggered a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Button {
    /// The primary button.
    #[default]
    Left,

    /// The auxiliary button.
    Middle,

    /// The secondary button.
    Right,

    /// The back button.
    Back,

    /// The forward button.
    Forward,

    /// Some other button.
    Other(u16),
}

impl Button {
    /// Returns true if this is the primary button.
    pub fn is_primary(self) -> bool {
        self == Button::Left
    }
}

/// The identifier of an active pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PointerId(pub u64);

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer was pressed.
    PointerDown {
        /// The buttons held down.
        buttons: Buttons,
        /// The position of the pointer, in client coordinates.
        position: Point,
        /// The pointer that was pressed.
        pointer: PointerId,
    },

    /// A click was completed.
    Click {
        /// The button that produced the click.
        button: Button,
        /// The node the click originated from.
        target: NodeId,
    },

    /// The element lost the capture of a pointer.
    LostPointerCapture {
        /// The pointer whose capture was lost.
        pointer: PointerId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_bit() {
        assert!(Buttons::PRIMARY.is_primary());
        assert!((Buttons::PRIMARY | Buttons::AUXILIARY).is_primary());
        assert!(!Buttons::SECONDARY.is_primary());
        assert!(!Buttons::empty().is_primary());
    }

    #[test]
    fn test_primary_button() {
        assert!(Button::Left.is_primary());
        assert!(!Button::Right.is_primary());
        assert!(!Button::Other(7).is_primary());
    }
}
