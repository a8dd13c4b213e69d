//! Accessibility support via AccessKit.
//!
//! This module provides the types a menu control uses to describe itself to
//! screen readers like NVDA (Windows), VoiceOver (macOS), and Orca (Linux).

pub use accesskit::{Action, Node, NodeId, Role};

use crate::Rectangle;

/// Information about a widget for accessibility purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetInfo {
    /// The accessibility role of the widget.
    pub role: Role,
    /// Whether the widget is enabled (interactive).
    pub enabled: bool,
    /// The current value (the command name of a menu item).
    pub value: Option<String>,
    /// Whether the widget is toggled/checked.
    pub toggled: Option<bool>,
    /// The widget bounds in window coordinates.
    pub bounds: Rectangle,
    /// Whether the widget is focusable.
    pub focusable: bool,
    /// Available actions on this widget.
    pub actions: Vec<Action>,
}

impl Default for WidgetInfo {
    fn default() -> Self {
        Self {
            role: Role::Unknown,
            enabled: true,
            value: None,
            toggled: None,
            bounds: Rectangle::default(),
            focusable: false,
            actions: Vec::new(),
        }
    }
}

impl WidgetInfo {
    /// Creates widget info for a menu item.
    pub fn menu_item() -> Self {
        Self {
            role: Role::MenuItem,
            focusable: true,
            actions: vec![Action::Click, Action::Focus],
            ..Self::default()
        }
    }

    /// Sets the bounds of the widget.
    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the enabled state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the toggled state.
    pub fn with_toggled(mut self, toggled: bool) -> Self {
        self.toggled = Some(toggled);
        self
    }

    /// Sets whether the widget takes part in the tab order.
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Converts this info into an AccessKit `Node`.
    pub fn build(self) -> Node {
        let mut node = Node::new(self.role);

        if !self.enabled {
            node.set_disabled();
        }

        if let Some(value) = self.value {
            node.set_value(value);
        }

        if let Some(toggled) = self.toggled {
            node.set_toggled(if toggled {
                accesskit::Toggled::True
            } else {
                accesskit::Toggled::False
            });
        }

        node.set_bounds(accesskit::Rect {
            x0: self.bounds.x as f64,
            y0: self.bounds.y as f64,
            x1: (self.bounds.x + self.bounds.width) as f64,
            y1: (self.bounds.y + self.bounds.height) as f64,
        });

        for action in self.actions {
            node.add_action(action);
        }

        node
    }
}

/// An accessibility event from a screen reader or assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// The action requested by the screen reader.
    pub action: Action,
    /// The target widget ID.
    pub target: NodeId,
}

impl Event {
    /// Returns true if this is a click action.
    pub fn is_click(&self) -> bool {
        self.action == Action::Click
    }

    /// Returns true if this is a focus action.
    pub fn is_focus(&self) -> bool {
        self.action == Action::Focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_defaults() {
        let info = WidgetInfo::menu_item();

        assert_eq!(info.role, Role::MenuItem);
        assert!(info.enabled);
        assert!(info.focusable);
        assert_eq!(info.actions, vec![Action::Click, Action::Focus]);
    }

    #[test]
    fn test_build_disabled_toggled() {
        let node = WidgetInfo::menu_item()
            .with_enabled(false)
            .with_toggled(true)
            .build();

        assert!(node.is_disabled());
        assert_eq!(node.toggled(), Some(accesskit::Toggled::True));
    }
}
