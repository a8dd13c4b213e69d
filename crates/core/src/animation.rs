//! Describe timed transitions and play them through an [`Animator`].
use futures::future::LocalBoxFuture;

use std::fmt;
use std::time::Duration;

/// A future that resolves once an animation has finished playing.
pub type Animation = LocalBoxFuture<'static, ()>;

/// The animatable property of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// A uniform scale, where `0.0` collapses the target and `1.0` leaves it
    /// untransformed.
    Scale,

    /// The opacity of the target.
    Opacity,
}

/// A timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,

    /// A cubic Bézier curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)` and `(1, 1)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The standard curve of menu transitions: `cubic-bezier(0.4, 0, 0.2, 1)`.
    pub const STANDARD: Self = Self::CubicBezier(0.4, 0.0, 0.2, 1.0);
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// A timed transition of a single [`Property`] from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// The animated property.
    pub property: Property,
    /// The starting value.
    pub from: f32,
    /// The final value.
    pub to: f32,
    /// How long the transition lasts.
    pub duration: Duration,
    /// The timing function.
    pub easing: Easing,
}

impl Transition {
    /// Creates a new [`Transition`].
    pub fn new(property: Property, from: f32, to: f32, duration: Duration) -> Self {
        Self {
            property,
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    /// A scale transition from nothing to full size.
    pub fn grow(duration: Duration) -> Self {
        Self::new(Property::Scale, 0.0, 1.0, duration)
    }

    /// An opacity transition from `opacity` to fully transparent.
    pub fn fade(opacity: f32, duration: Duration) -> Self {
        Self::new(Property::Opacity, opacity, 0.0, duration)
    }

    /// Sets the [`Easing`] of the [`Transition`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// The animation primitive of the host.
///
/// An [`Animator`] plays a [`Transition`] on some visual target and returns
/// a future that resolves when it has finished.
pub trait Animator {
    /// Plays the given [`Transition`].
    fn animate(&self, transition: Transition) -> Animation;
}
