//! Route input to the trigger-effect engine.
use crate::core::document::{Mutation, MutationKind, Notification};
use crate::core::keyboard;
use crate::core::mouse::{self, Button, Buttons, PointerId};
use crate::core::{Document, Event, Kind, NodeId, Point, Shell, TriggerEffect};

use super::MenuItem;
use super::trigger;

impl MenuItem {
    /// Processes an [`Event`] addressed to the item.
    pub fn update(&self, event: &Event, shell: &mut Shell<'_>) {
        match event {
            Event::Mouse(mouse::Event::PointerDown {
                buttons,
                position,
                pointer,
            }) => {
                self.on_pointer_down(*buttons, *position, *pointer, shell);
            }
            Event::Mouse(mouse::Event::Click { button, target }) => {
                self.on_click(*button, *target, shell);
            }
            Event::Mouse(mouse::Event::LostPointerCapture { pointer }) => {
                self.on_lost_pointer_capture(*pointer);
            }
            Event::Keyboard(keyboard::Event::KeyPressed { code }) => {
                self.on_key_down(*code, shell);
            }
            Event::Keyboard(keyboard::Event::KeyReleased { .. }) => {}
            Event::Mutation(Mutation { target, kind }) => {
                if *target == self.id() && *kind == MutationKind::ChildList {
                    self.children_changed();
                }
            }
            #[cfg(feature = "accessibility")]
            Event::Accessibility(event) => {
                if event.is_click() {
                    self.click(shell);
                } else if event.is_focus() {
                    self.inner.document.borrow_mut().focus(self.id());
                }
            }
        }
    }

    /// Handles a pointer-down.
    ///
    /// Only the primary button activates the item. Under a closing menu the
    /// pointer-down is swallowed: both its default action and its
    /// propagation are suppressed.
    pub fn on_pointer_down(
        &self,
        buttons: Buttons,
        position: Point,
        pointer: PointerId,
        shell: &mut Shell<'_>,
    ) {
        if !buttons.is_primary() {
            return;
        }

        if self.is_closing() {
            log::debug!("{:?}: pointer-down under a closing menu", self.id());

            shell.prevent_default();
            shell.capture_event();
            return;
        }

        shell.capture_event();

        if self.trigger_effect() == TriggerEffect::Ripple {
            shell.spawn(trigger::pointer_down_ripple(&self.inner, position, pointer));
        }
    }

    /// Handles a click that originated from `target`.
    ///
    /// Clicks are ignored unless they come from the primary button, from
    /// this very item (not a nested one) within the same menu, and the item
    /// is not under a closing menu.
    pub fn on_click(&self, button: Button, target: NodeId, shell: &mut Shell<'_>) {
        if !button.is_primary() {
            return;
        }

        if !self.accepts_click_from(target) {
            log::debug!("{:?}: ignoring click from {target:?}", self.id());
            return;
        }

        let gesture = self.inner.state.borrow().armed_gesture;

        if self.togglable() {
            let notification =
                Document::dispatch(&self.inner.document, Notification::toggle(self.id()));

            if notification.is_default_prevented() {
                log::debug!("{:?}: toggle canceled", self.id());
            } else {
                self.set_toggled(!self.toggled());
            }
        }

        match self.trigger_effect() {
            TriggerEffect::Ripple => {
                let has_pointer_ripple = gesture.is_some_and(|gesture| {
                    self.inner.state.borrow().ripples.contains_gesture(gesture)
                });

                if !has_pointer_ripple {
                    shell.spawn(trigger::click_ripple(&self.inner));
                }
            }
            TriggerEffect::Blink => {
                shell.spawn(trigger::blink(&self.inner));
            }
            TriggerEffect::None => {}
        }
    }

    /// Handles a key press.
    ///
    /// `Enter` and `Space` activate the item, unless it hosts a submenu; in
    /// that case only their default action is suppressed.
    pub fn on_key_down(&self, code: keyboard::Code, shell: &mut Shell<'_>) {
        if !code.is_activation() {
            return;
        }

        shell.prevent_default();

        if self.hosts_submenu() {
            return;
        }

        shell.capture_event();
        self.click(shell);
    }

    /// Handles the loss of a pointer capture.
    pub fn on_lost_pointer_capture(&self, pointer: PointerId) {
        self.inner.lose_pointer_capture(pointer);
    }

    /// Issues a synthetic primary click on the item.
    ///
    /// The item handles the click first, then a `click` notification bubbles
    /// through the document.
    pub fn click(&self, shell: &mut Shell<'_>) {
        self.on_click(Button::Left, self.id(), shell);

        let _ = Document::dispatch(&self.inner.document, Notification::click(self.id()));
    }

    fn accepts_click_from(&self, target: NodeId) -> bool {
        let document = self.inner.document.borrow();
        let id = self.id();

        document.closest(target, Kind::MenuItem) == Some(id)
            && document.closest(target, Kind::Menu) == document.closest(id, Kind::Menu)
            && !document.has_closing_ancestor(id)
    }
}
