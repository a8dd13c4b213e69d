//! Ripples and the host that holds them.
use crate::core::{Point, Rectangle};

/// The identifier of a [`Ripple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(u64);

/// The activation token minted by a pointer-down.
///
/// A click that arrives while the ripple of its own pointer-down gesture is
/// still alive does not draw a second ripple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gesture(u64);

/// What produced a [`Ripple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A pointer-down, anchored at the pointer.
    PointerDown(Gesture),
    /// A click without a preceding pointer-down ripple, anchored at the center.
    Click,
}

/// The lifecycle phase of a [`Ripple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Expanding to full size.
    Growing,
    /// Fully grown, waiting for the pointer to be released.
    Holding,
    /// Fading out.
    Fading,
}

/// The placement of a [`Ripple`] relative to the top-left corner of its host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// The offset of the top edge.
    pub top: f32,
    /// The offset of the left edge.
    pub left: f32,
    /// The diameter.
    pub size: f32,
}

impl Geometry {
    /// Centers a ripple on `point`, given in the same coordinates as `host`.
    ///
    /// The diameter is `scale` times the larger side of the host.
    pub fn at(host: Rectangle, point: Point, scale: f32) -> Self {
        let size = host.size().max_dimension() * scale;

        Self {
            top: point.y - host.y - size / 2.0,
            left: point.x - host.x - size / 2.0,
            size,
        }
    }

    /// Centers a ripple on the center of the host.
    pub fn centered(host: Rectangle, scale: f32) -> Self {
        Self::at(host, host.center(), scale)
    }
}

/// A transient circle of visual feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// The identifier of the ripple.
    pub id: RippleId,
    /// What produced the ripple.
    pub origin: Origin,
    /// Where the ripple is drawn.
    pub geometry: Geometry,
    /// The current phase.
    pub phase: Phase,
}

/// The container ripples are drawn into.
#[derive(Debug, Default)]
pub(crate) struct RippleHost {
    ripples: Vec<Ripple>,
    next_ripple: u64,
    next_gesture: u64,
}

impl RippleHost {
    pub(crate) fn gesture(&mut self) -> Gesture {
        self.next_gesture += 1;
        Gesture(self.next_gesture)
    }

    pub(crate) fn insert(&mut self, origin: Origin, geometry: Geometry) -> RippleId {
        self.next_ripple += 1;

        let id = RippleId(self.next_ripple);

        self.ripples.push(Ripple {
            id,
            origin,
            geometry,
            phase: Phase::Growing,
        });

        id
    }

    pub(crate) fn remove(&mut self, id: RippleId) -> Option<Ripple> {
        let index = self.ripples.iter().position(|ripple| ripple.id == id)?;

        Some(self.ripples.remove(index))
    }

    pub(crate) fn set_phase(&mut self, id: RippleId, phase: Phase) {
        if let Some(ripple) = self.ripples.iter_mut().find(|ripple| ripple.id == id) {
            ripple.phase = phase;
        }
    }

    pub(crate) fn contains_gesture(&self, gesture: Gesture) -> bool {
        self.ripples
            .iter()
            .any(|ripple| ripple.origin == Origin::PointerDown(gesture))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.ripples.len()
    }

    pub(crate) fn as_slice(&self) -> &[Ripple] {
        &self.ripples
    }
}
