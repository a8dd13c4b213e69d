//! The trigger-effect engine.
//!
//! Every activation plays at most one effect:
//!
//! - a pointer-down ripple grows at the pointer, holds until the pointer
//!   capture is lost, then fades;
//! - a click ripple grows at the center and fades right away;
//! - a blink moves focus to the parent and back, holding twice.
//!
//! The synchronous part of each effect runs before the [`Effect`] is
//! returned; the rest waits on the animator, the pointer capture and the
//! timer. When the last ripple is removed, or when a blink ends, the pending
//! trigger-end callbacks run in registration order.
use crate::core::animation::Transition;
use crate::core::mouse::PointerId;
use crate::core::{Effect, Point, style};

use futures::channel::oneshot;
use futures::future;

use std::rc::Rc;

use super::Inner;
use super::ripple::{Geometry, Origin, Phase, RippleId};
use super::state::Callback;

/// Starts a ripple anchored at the pointer and captures the pointer.
pub(super) fn pointer_down_ripple(
    inner: &Rc<Inner>,
    position: Point,
    pointer: PointerId,
) -> Effect {
    let bounds = inner.document.borrow().bounds(inner.id);
    let geometry = Geometry::at(bounds, position, inner.settings.ripple_scale);

    let (ripple, capture_lost) = {
        let mut state = inner.state.borrow_mut();
        let (sender, receiver) = oneshot::channel();
        let gesture = state.ripples.gesture();

        state.capture_waiters.push(sender);
        state.armed_gesture = Some(gesture);

        (
            state.ripples.insert(Origin::PointerDown(gesture), geometry),
            receiver,
        )
    };

    log::trace!("{:?}: pointer-down ripple {ripple:?} at {geometry:?}", inner.id);

    inner
        .document
        .borrow_mut()
        .set_pointer_capture(inner.id, pointer);

    let grow = inner.animator.animate(
        Transition::grow(inner.settings.grow).easing(inner.settings.easing),
    );

    let inner = Rc::clone(inner);

    Box::pin(async move {
        let grown = async {
            grow.await;
            inner.state.borrow_mut().ripples.set_phase(ripple, Phase::Holding);
        };

        // A dropped sender means the item went away; fade out regardless.
        let (_capture_lost, ()) = future::join(capture_lost, grown).await;

        inner.fade_out(ripple).await;
    })
}

/// Starts a ripple anchored at the center of the item.
pub(super) fn click_ripple(inner: &Rc<Inner>) -> Effect {
    let bounds = inner.document.borrow().bounds(inner.id);
    let geometry = Geometry::centered(bounds, inner.settings.ripple_scale);
    let ripple = inner
        .state
        .borrow_mut()
        .ripples
        .insert(Origin::Click, geometry);

    log::trace!("{:?}: click ripple {ripple:?} at {geometry:?}", inner.id);

    let grow = inner.animator.animate(
        Transition::grow(inner.settings.grow).easing(inner.settings.easing),
    );

    let inner = Rc::clone(inner);

    Box::pin(async move {
        grow.await;
        inner.fade_out(ripple).await;
    })
}

/// Moves focus to the parent, then back to the item.
pub(super) fn blink(inner: &Rc<Inner>) -> Effect {
    {
        let mut state = inner.state.borrow_mut();

        state.blinks += 1;

        if inner.settings.preserve_blink_quirk {
            state.blink_latched = true;
        }
    }

    {
        let mut document = inner.document.borrow_mut();

        if let Some(parent) = document.parent(inner.id) {
            document.focus(parent);
        }
    }

    log::trace!("{:?}: blink", inner.id);

    let hold = inner.settings.blink_hold;
    let first_hold = inner.timer.sleep(hold);
    let inner = Rc::clone(inner);

    Box::pin(async move {
        first_hold.await;

        inner.document.borrow_mut().focus(inner.id);

        inner.timer.sleep(hold).await;

        let callbacks = {
            let mut state = inner.state.borrow_mut();
            state.blinks = state.blinks.saturating_sub(1);

            if state.blinks == 0 {
                std::mem::take(&mut state.pending)
            } else {
                Vec::new()
            }
        };

        run(callbacks);
    })
}

impl Inner {
    async fn fade_out(&self, ripple: RippleId) {
        let opacity = {
            let document = self.document.borrow();

            style::ripple_opacity(&document, self.id, self.settings.ripple_opacity)
        };

        self.state
            .borrow_mut()
            .ripples
            .set_phase(ripple, Phase::Fading);

        self.animator
            .animate(Transition::fade(opacity, self.settings.fade).easing(self.settings.easing))
            .await;

        self.remove_ripple(ripple);
    }

    fn remove_ripple(&self, ripple: RippleId) {
        let callbacks = {
            let mut state = self.state.borrow_mut();

            if let Some(removed) = state.ripples.remove(ripple) {
                if let Origin::PointerDown(gesture) = removed.origin {
                    if state.armed_gesture == Some(gesture) {
                        state.armed_gesture = None;
                    }
                }
            }

            log::trace!("{:?}: ripple {ripple:?} removed", self.id);

            if state.ripples.is_empty() {
                std::mem::take(&mut state.pending)
            } else {
                Vec::new()
            }
        };

        run(callbacks);
    }

    /// Runs `callback` now if no effect is in flight, or once they are all
    /// finished.
    pub(super) fn on_trigger_end(&self, callback: Callback) {
        let mut state = self.state.borrow_mut();

        if state.is_idle() {
            drop(state);
            callback();
        } else {
            state.pending.push(callback);
        }
    }

    /// Resolves every capture waiter registered by earlier pointer-downs.
    pub(super) fn lose_pointer_capture(&self, pointer: PointerId) {
        {
            let mut document = self.document.borrow_mut();

            if document.pointer_capture(pointer) == Some(self.id) {
                let _ = document.release_pointer_capture(pointer);
            }
        }

        let waiters = std::mem::take(&mut self.state.borrow_mut().capture_waiters);

        log::trace!(
            "{:?}: lost capture of {pointer:?}, {} waiters",
            self.id,
            waiters.len()
        );

        for waiter in waiters {
            let _ = waiter.send(());
        }
    }
}

fn run(callbacks: Vec<Callback>) {
    for callback in callbacks {
        callback();
    }
}
