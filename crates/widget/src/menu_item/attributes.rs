//! The reflected attributes of a menu item.
//!
//! Every attribute lives in a typed field; the document only sees a change
//! when the typed value actually changed.
use crate::core::{Document, NodeId};

/// The `value` attribute.
pub const VALUE: &str = "value";
/// The `toggled` attribute.
pub const TOGGLED: &str = "toggled";
/// The `togglable` attribute.
pub const TOGGLABLE: &str = "togglable";
/// The `disabled` attribute.
pub const DISABLED: &str = "disabled";

/// The typed attributes of a menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// The value associated with the item, usually a command name.
    pub value: Option<String>,
    /// Whether the item is checked.
    pub toggled: bool,
    /// Whether activating the item flips `toggled`.
    pub togglable: bool,
    /// Whether the item is disabled.
    pub disabled: bool,
}

/// A presence-encoded boolean attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The `toggled` attribute.
    Toggled,
    /// The `togglable` attribute.
    Togglable,
    /// The `disabled` attribute.
    Disabled,
}

impl Flag {
    /// Returns the attribute name of the [`Flag`].
    pub fn name(self) -> &'static str {
        match self {
            Flag::Toggled => TOGGLED,
            Flag::Togglable => TOGGLABLE,
            Flag::Disabled => DISABLED,
        }
    }

    /// Parses a [`Flag`] from its attribute name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            TOGGLED => Some(Flag::Toggled),
            TOGGLABLE => Some(Flag::Togglable),
            DISABLED => Some(Flag::Disabled),
            _ => None,
        }
    }
}

impl Attributes {
    /// Reads the attributes a node currently carries.
    pub fn read(document: &Document, node: NodeId) -> Self {
        Self {
            value: document.attribute(node, VALUE).map(str::to_owned),
            toggled: document.has_attribute(node, TOGGLED),
            togglable: document.has_attribute(node, TOGGLABLE),
            disabled: document.has_attribute(node, DISABLED),
        }
    }

    /// Returns the value of a [`Flag`].
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Toggled => self.toggled,
            Flag::Togglable => self.togglable,
            Flag::Disabled => self.disabled,
        }
    }

    /// Sets a [`Flag`], returning true if it changed.
    pub(crate) fn set_flag(&mut self, flag: Flag, on: bool) -> bool {
        let field = match flag {
            Flag::Toggled => &mut self.toggled,
            Flag::Togglable => &mut self.togglable,
            Flag::Disabled => &mut self.disabled,
        };

        let changed = *field != on;
        *field = on;

        changed
    }

    /// Sets the value, returning true if it changed.
    pub(crate) fn set_value(&mut self, value: Option<&str>) -> bool {
        if self.value.as_deref() == value {
            return false;
        }

        self.value = value.map(str::to_owned);

        true
    }
}

/// Writes a [`Flag`] to the document.
pub(crate) fn publish_flag(document: &mut Document, node: NodeId, flag: Flag, on: bool) {
    if on {
        document.set_attribute(node, flag.name(), "");
    } else {
        document.remove_attribute(node, flag.name());
    }
}

/// Writes the value to the document.
pub(crate) fn publish_value(document: &mut Document, node: NodeId, value: Option<&str>) {
    match value {
        Some(value) => document.set_attribute(node, VALUE, value),
        None => document.remove_attribute(node, VALUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Kind;

    #[test]
    fn test_read_presence() {
        let mut document = Document::new();
        let item = document.create(Kind::MenuItem);

        document.set_attribute(item, TOGGLABLE, "");
        document.set_attribute(item, DISABLED, "false");
        document.set_attribute(item, VALUE, "paste");

        let attributes = Attributes::read(&document, item);

        assert_eq!(attributes.value.as_deref(), Some("paste"));
        assert!(attributes.togglable);
        assert!(attributes.disabled);
        assert!(!attributes.toggled);
    }

    #[test]
    fn test_set_flag_reports_changes() {
        let mut attributes = Attributes::default();

        assert!(attributes.set_flag(Flag::Toggled, true));
        assert!(!attributes.set_flag(Flag::Toggled, true));
        assert!(attributes.flag(Flag::Toggled));
        assert!(!attributes.set_flag(Flag::Disabled, false));
    }

    #[test]
    fn test_set_value_reports_changes() {
        let mut attributes = Attributes::default();

        assert!(!attributes.set_value(None));
        assert!(attributes.set_value(Some("cut")));
        assert!(!attributes.set_value(Some("cut")));
        assert!(attributes.set_value(None));
        assert_eq!(attributes.value, None);
    }

    #[test]
    fn test_flag_names() {
        for flag in [Flag::Toggled, Flag::Togglable, Flag::Disabled] {
            assert_eq!(Flag::from_name(flag.name()), Some(flag));
        }

        assert_eq!(Flag::from_name(VALUE), None);
    }
}
