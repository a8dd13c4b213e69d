//! Configure the timing and look of trigger effects.
//!
//! [`Settings`] can be built in code or, with the `serde` feature, loaded
//! from a RON file:
//!
//! ```text
//! (
//!     trigger_effect: blink,
//!     ripple_scale: 1.5,
//!     ripple_opacity: 0.1,
//!     grow: 300,
//!     fade: 300,
//!     blink_hold: 150,
//!     easing: CubicBezier(0.4, 0.0, 0.2, 1.0),
//!     preserve_blink_quirk: false,
//! )
//! ```
use crate::Error;
use crate::animation::Easing;
use crate::style::TriggerEffect;

use std::path::Path;
use std::time::Duration;

/// The settings of a menu control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Settings {
    /// The effect used when no `--trigger-effect` is set, or when it cannot
    /// be parsed.
    pub trigger_effect: TriggerEffect,

    /// The diameter of a ripple relative to the larger side of the item.
    pub ripple_scale: f32,

    /// The resting opacity of a ripple when no `--ripple-opacity` is set.
    pub ripple_opacity: f32,

    /// How long a ripple takes to grow.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub grow: Duration,

    /// How long a ripple takes to fade out.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub fade: Duration,

    /// How long each of the two holds of a blink lasts.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub blink_hold: Duration,

    /// The timing function of ripple transitions.
    pub easing: Easing,

    /// Leaves the blinking flag set once a blink has finished.
    ///
    /// Every later trigger-end query is then deferred until the next ripple
    /// or blink drains the queue. Only useful for hosts that depend on that
    /// behavior.
    pub preserve_blink_quirk: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trigger_effect: TriggerEffect::Ripple,
            ripple_scale: 1.5,
            ripple_opacity: 0.1,
            grow: Duration::from_millis(300),
            fade: Duration::from_millis(300),
            blink_hold: Duration::from_millis(150),
            easing: Easing::STANDARD,
            preserve_blink_quirk: false,
        }
    }
}

impl Settings {
    /// Sets the fallback [`TriggerEffect`].
    pub fn trigger_effect(mut self, trigger_effect: TriggerEffect) -> Self {
        self.trigger_effect = trigger_effect;
        self
    }

    /// Sets the ripple scale.
    pub fn ripple_scale(mut self, ripple_scale: f32) -> Self {
        self.ripple_scale = ripple_scale;
        self
    }

    /// Sets the fallback ripple opacity.
    pub fn ripple_opacity(mut self, ripple_opacity: f32) -> Self {
        self.ripple_opacity = ripple_opacity;
        self
    }

    /// Sets the grow and fade durations of ripples.
    pub fn ripple_durations(mut self, grow: Duration, fade: Duration) -> Self {
        self.grow = grow;
        self.fade = fade;
        self
    }

    /// Sets the duration of each blink hold.
    pub fn blink_hold(mut self, blink_hold: Duration) -> Self {
        self.blink_hold = blink_hold;
        self
    }

    /// Sets the [`Easing`] of ripple transitions.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets whether the blinking flag stays set after a blink.
    pub fn preserve_blink_quirk(mut self, preserve: bool) -> Self {
        self.preserve_blink_quirk = preserve;
        self
    }

    /// Loads [`Settings`] from a file path.
    ///
    /// Supports RON format (`.ron` extension) when the `serde` feature is
    /// enabled. Missing fields take their default value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => load_ron(path),
            _ => Err(Error::UnsupportedFormat(extension.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
fn load_ron(path: &Path) -> Result<Settings, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read(e.to_string()))?;

    ron::from_str(&content).map_err(|e| Error::Parse(e.to_string()))
}

#[cfg(not(feature = "serde"))]
fn load_ron(_path: &Path) -> Result<Settings, Error> {
    Err(Error::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_owned(),
    ))
}

#[cfg(feature = "serde")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.trigger_effect, TriggerEffect::Ripple);
        assert_eq!(settings.ripple_scale, 1.5);
        assert_eq!(settings.grow, Duration::from_millis(300));
        assert_eq!(settings.fade, Duration::from_millis(300));
        assert_eq!(settings.blink_hold, Duration::from_millis(150));
        assert!(!settings.preserve_blink_quirk);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load("/nonexistent/xmenu.ron");

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let path = std::env::temp_dir().join("xmenu-settings-test.toml");
        std::fs::write(&path, "grow = 100").expect("write settings");

        let result = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(result, Err(Error::UnsupportedFormat("toml".to_owned())));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_ron() {
        let path = std::env::temp_dir().join("xmenu-settings-test.ron");
        std::fs::write(&path, "(trigger_effect: blink, blink_hold: 200)").expect("write settings");

        let result = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        let settings = result.expect("load settings");
        assert_eq!(settings.trigger_effect, TriggerEffect::Blink);
        assert_eq!(settings.blink_hold, Duration::from_millis(200));
        assert_eq!(settings.grow, Duration::from_millis(300));
    }
}
