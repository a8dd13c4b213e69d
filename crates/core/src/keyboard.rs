//! Listen to keyboard events.

/// The physical key code of a keyboard event.
///
/// Only the codes the menu controls react to are named; everything else is
/// [`Code::Unidentified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// The main `Enter` key.
    Enter,
    /// The numeric keypad `Enter` key.
    NumpadEnter,
    /// The space bar.
    Space,
    /// The `Escape` key.
    Escape,
    /// The `Tab` key.
    Tab,
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// The left arrow.
    ArrowLeft,
    /// The right arrow.
    ArrowRight,
    /// Any other key.
    Unidentified,
}

impl Code {
    /// Parses a physical key code from its W3C `code` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Code::Enter,
            "NumpadEnter" => Code::NumpadEnter,
            "Space" => Code::Space,
            "Escape" => Code::Escape,
            "Tab" => Code::Tab,
            "ArrowUp" => Code::ArrowUp,
            "ArrowDown" => Code::ArrowDown,
            "ArrowLeft" => Code::ArrowLeft,
            "ArrowRight" => Code::ArrowRight,
            _ => Code::Unidentified,
        }
    }

    /// Returns true if the key activates a menu item.
    ///
    /// Only the main `Enter` key and the space bar do; `NumpadEnter` has a
    /// different code and is left to the host.
    pub fn is_activation(self) -> bool {
        matches!(self, Code::Enter | Code::Space)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    KeyPressed {
        /// The physical code of the key.
        code: Code,
    },

    /// A key was released.
    KeyReleased {
        /// The physical code of the key.
        code: Code,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Code::from_name("Enter"), Code::Enter);
        assert_eq!(Code::from_name("Space"), Code::Space);
        assert_eq!(Code::from_name("KeyA"), Code::Unidentified);
    }

    #[test]
    fn test_activation_keys() {
        assert!(Code::Enter.is_activation());
        assert!(Code::Space.is_activation());
        assert!(!Code::NumpadEnter.is_activation());
        assert!(!Code::Escape.is_activation());
    }
}
