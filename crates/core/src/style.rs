//! Read the computed style parameters of a menu control.
use crate::Error;
use crate::document::{Document, NodeId};

use std::fmt;
use std::str::FromStr;

/// The custom property selecting the [`TriggerEffect`].
pub const TRIGGER_EFFECT: &str = "--trigger-effect";

/// The custom property holding the resting opacity of a ripple.
pub const RIPPLE_OPACITY: &str = "--ripple-opacity";

/// The visual feedback played when a menu item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TriggerEffect {
    /// A circle expands from the activation point and fades out.
    #[default]
    Ripple,
    /// Focus briefly leaves the item and comes back.
    Blink,
    /// No feedback.
    None,
}

impl FromStr for TriggerEffect {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "ripple" => Ok(TriggerEffect::Ripple),
            "blink" => Ok(TriggerEffect::Blink),
            "none" => Ok(TriggerEffect::None),
            other => Err(Error::InvalidTriggerEffect(other.to_owned())),
        }
    }
}

impl fmt::Display for TriggerEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriggerEffect::Ripple => "ripple",
            TriggerEffect::Blink => "blink",
            TriggerEffect::None => "none",
        })
    }
}

/// Returns the computed [`TriggerEffect`] of a node.
///
/// Unset or unparsable values resolve to `fallback`.
pub fn trigger_effect(document: &Document, node: NodeId, fallback: TriggerEffect) -> TriggerEffect {
    let Some(value) = document.computed_property(node, TRIGGER_EFFECT) else {
        return fallback;
    };

    value.parse().unwrap_or_else(|error| {
        log::warn!("{error}; using {fallback}");
        fallback
    })
}

/// Returns the computed resting opacity of the ripples of a node.
///
/// Unset or unparsable values resolve to `fallback`.
pub fn ripple_opacity(document: &Document, node: NodeId, fallback: f32) -> f32 {
    let Some(value) = document.computed_property(node, RIPPLE_OPACITY) else {
        return fallback;
    };

    match value.trim().parse::<f32>() {
        Ok(opacity) => opacity.clamp(0.0, 1.0),
        Err(error) => {
            log::warn!("invalid {RIPPLE_OPACITY} {value:?}: {error}; using {fallback}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Kind;

    #[test]
    fn test_parse_trigger_effect() {
        assert_eq!("ripple".parse(), Ok(TriggerEffect::Ripple));
        assert_eq!(" blink ".parse(), Ok(TriggerEffect::Blink));
        assert_eq!("none".parse(), Ok(TriggerEffect::None));
        assert_eq!(
            "sparkle".parse::<TriggerEffect>(),
            Err(Error::InvalidTriggerEffect("sparkle".to_owned()))
        );
    }

    #[test]
    fn test_trigger_effect_is_inherited() {
        let mut document = Document::new();
        let menu = document.create(Kind::Menu);
        let item = document.create(Kind::MenuItem);
        document.append(menu, item);

        assert_eq!(
            trigger_effect(&document, item, TriggerEffect::Ripple),
            TriggerEffect::Ripple
        );

        document.set_property(menu, TRIGGER_EFFECT, "blink");
        assert_eq!(
            trigger_effect(&document, item, TriggerEffect::Ripple),
            TriggerEffect::Blink
        );

        document.set_property(item, TRIGGER_EFFECT, "bogus");
        assert_eq!(
            trigger_effect(&document, item, TriggerEffect::None),
            TriggerEffect::None
        );
    }

    #[test]
    fn test_ripple_opacity() {
        let mut document = Document::new();
        let item = document.create(Kind::MenuItem);

        assert_eq!(ripple_opacity(&document, item, 0.1), 0.1);

        document.set_property(item, RIPPLE_OPACITY, "0.25");
        assert_eq!(ripple_opacity(&document, item, 0.1), 0.25);

        document.set_property(item, RIPPLE_OPACITY, "lots");
        assert_eq!(ripple_opacity(&document, item, 0.1), 0.1);
    }
}
