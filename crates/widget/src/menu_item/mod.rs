//! An interactive entry of a menu.
//!
//! A [`MenuItem`] is attached to a node of a shared [`Document`]. It mirrors
//! the attributes of that node into typed state, keeps its accessible state
//! and submenu indicator in sync, and plays a trigger effect every time it is
//! activated.
//!
//! # Example
//!
//! ```no_run
//! use xmenu_widget::MenuItem;
//! use xmenu_widget::animation::Delay;
//! use xmenu_widget::core::{Document, Kind, Shell, Timer};
//! use xmenu_widget::core::keyboard::Code;
//!
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! # fn run(timer: impl Timer + Clone + 'static) {
//! let document = Rc::new(RefCell::new(Document::new()));
//! let id = document.borrow_mut().create(Kind::MenuItem);
//!
//! let item = MenuItem::new(document, id, Delay::new(timer.clone()), timer);
//! item.connect();
//!
//! let mut effects = Vec::new();
//! let mut shell = Shell::new(&mut effects);
//!
//! item.on_key_down(Code::Enter, &mut shell);
//! # }
//! ```
mod accessibility;
pub mod attributes;
mod dispatch;
mod indicator;
pub mod ripple;
mod state;
mod trigger;

pub use accessibility::ROLE;
pub use attributes::{Attributes, Flag};
pub use ripple::{Geometry, Gesture, Origin, Phase, Ripple, RippleId};

use crate::core::style;
use crate::core::{Animator, Document, Kind, NodeId, Settings, Timer, TriggerEffect};

use futures::channel::oneshot;

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use state::State;

pub(crate) struct Inner {
    id: NodeId,
    document: Rc<RefCell<Document>>,
    animator: Rc<dyn Animator>,
    timer: Rc<dyn Timer>,
    settings: Settings,
    state: RefCell<State>,
}

/// A menu item attached to a node of a [`Document`].
///
/// Cloning a [`MenuItem`] yields another handle to the same item.
#[derive(Clone)]
pub struct MenuItem {
    inner: Rc<Inner>,
}

impl MenuItem {
    /// Creates a [`MenuItem`] for the node `id` with the default
    /// [`Settings`].
    pub fn new(
        document: Rc<RefCell<Document>>,
        id: NodeId,
        animator: impl Animator + 'static,
        timer: impl Timer + 'static,
    ) -> Self {
        Self::with_settings(document, id, animator, timer, Settings::default())
    }

    /// Creates a [`MenuItem`] for the node `id` with the given [`Settings`].
    ///
    /// The attributes the node already carries are adopted, and its
    /// accessible state is published right away.
    pub fn with_settings(
        document: Rc<RefCell<Document>>,
        id: NodeId,
        animator: impl Animator + 'static,
        timer: impl Timer + 'static,
        settings: Settings,
    ) -> Self {
        let attributes = Attributes::read(&document.borrow(), id);

        let inner = Rc::new(Inner {
            id,
            document,
            animator: Rc::new(animator),
            timer: Rc::new(timer),
            settings,
            state: RefCell::new(State {
                attributes,
                ..State::default()
            }),
        });

        inner.sync_accessibility();

        Self { inner }
    }

    /// Returns the node of the item.
    pub fn id(&self) -> NodeId {
        self.inner.id
    }

    /// Returns the [`Settings`] of the item.
    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Signals that the node was inserted into the document.
    pub fn connect(&self) {
        self.inner.state.borrow_mut().is_connected = true;

        self.inner.update_indicator();
        self.inner.sync_accessibility();
    }

    /// Signals that the node was taken out of the document.
    pub fn disconnect(&self) {
        self.inner.state.borrow_mut().is_connected = false;
    }

    /// Returns whether the item is connected.
    pub fn is_connected(&self) -> bool {
        self.inner.state.borrow().is_connected
    }

    /// Signals that the children of the node changed.
    pub fn children_changed(&self) {
        if self.is_connected() {
            self.inner.update_indicator();
        }
    }

    /// Signals that the attribute `name` of the node was changed by someone
    /// else than the item.
    pub fn attribute_changed(&self, name: &str) {
        if name == attributes::VALUE {
            let value = self
                .inner
                .document
                .borrow()
                .attribute(self.id(), name)
                .map(str::to_owned);

            let _ = self
                .inner
                .state
                .borrow_mut()
                .attributes
                .set_value(value.as_deref());

            return;
        }

        let Some(flag) = Flag::from_name(name) else {
            return;
        };

        let on = self.inner.document.borrow().has_attribute(self.id(), name);
        let changed = self.inner.state.borrow_mut().attributes.set_flag(flag, on);

        if changed && flag == Flag::Disabled {
            self.inner.sync_accessibility();
        }
    }

    /// Returns a snapshot of the attributes of the item.
    pub fn attributes(&self) -> Attributes {
        self.inner.state.borrow().attributes.clone()
    }

    /// Returns the value of the item.
    pub fn value(&self) -> Option<String> {
        self.inner.state.borrow().attributes.value.clone()
    }

    /// Sets the value of the item.
    pub fn set_value(&self, value: Option<&str>) {
        let changed = self.inner.state.borrow_mut().attributes.set_value(value);

        if changed {
            attributes::publish_value(&mut self.inner.document.borrow_mut(), self.id(), value);
        }
    }

    /// Returns whether the item is toggled.
    pub fn toggled(&self) -> bool {
        self.inner.state.borrow().attributes.toggled
    }

    /// Sets whether the item is toggled.
    pub fn set_toggled(&self, toggled: bool) {
        self.inner.set_flag(Flag::Toggled, toggled);
    }

    /// Returns whether activating the item flips its toggled state.
    pub fn togglable(&self) -> bool {
        self.inner.state.borrow().attributes.togglable
    }

    /// Sets whether activating the item flips its toggled state.
    pub fn set_togglable(&self, togglable: bool) {
        self.inner.set_flag(Flag::Togglable, togglable);
    }

    /// Returns whether the item is disabled.
    pub fn disabled(&self) -> bool {
        self.inner.state.borrow().attributes.disabled
    }

    /// Sets whether the item is disabled.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.set_flag(Flag::Disabled, disabled);
    }

    /// Returns whether the submenu indicator is shown.
    pub fn is_indicator_visible(&self) -> bool {
        self.inner.state.borrow().is_indicator_visible
    }

    /// Returns whether a blink is in flight.
    pub fn is_blinking(&self) -> bool {
        self.inner.state.borrow().is_blinking()
    }

    /// Returns the ripples currently drawn, oldest first.
    pub fn ripples(&self) -> Vec<Ripple> {
        self.inner.state.borrow().ripples.as_slice().to_vec()
    }

    /// Returns the number of ripples currently drawn.
    pub fn ripple_count(&self) -> usize {
        self.inner.state.borrow().ripples.len()
    }

    /// Returns the number of callbacks waiting for the trigger effects to
    /// end.
    pub fn pending_callbacks(&self) -> usize {
        self.inner.state.borrow().pending.len()
    }

    /// Runs `callback` once every trigger effect in flight has finished.
    ///
    /// When no effect is in flight the callback runs before this returns.
    /// Callbacks run in the order they were registered.
    pub fn on_trigger_end(&self, callback: impl FnOnce() + 'static) {
        self.inner.on_trigger_end(Box::new(callback));
    }

    /// Returns a future that resolves once every trigger effect in flight
    /// has finished.
    pub fn when_trigger_end(&self) -> impl Future<Output = ()> + 'static {
        let (sender, receiver) = oneshot::channel();

        self.on_trigger_end(move || {
            let _ = sender.send(());
        });

        async move {
            let _ = receiver.await;
        }
    }

    /// Returns the accessible description of the item.
    #[cfg(feature = "accessibility")]
    pub fn accessibility(&self) -> crate::core::accessibility::WidgetInfo {
        use crate::core::accessibility::WidgetInfo;

        let (bounds, tab_index) = {
            let document = self.inner.document.borrow();

            (document.bounds(self.id()), document.tab_index(self.id()))
        };
        let state = self.inner.state.borrow();
        let attributes = &state.attributes;

        let mut info = WidgetInfo::menu_item()
            .with_bounds(bounds)
            .with_enabled(!attributes.disabled)
            .with_focusable(tab_index >= 0);

        if let Some(value) = &attributes.value {
            info = info.with_value(value.clone());
        }

        if attributes.togglable {
            info = info.with_toggled(attributes.toggled);
        }

        info
    }

    fn trigger_effect(&self) -> TriggerEffect {
        style::trigger_effect(
            &self.inner.document.borrow(),
            self.id(),
            self.inner.settings.trigger_effect,
        )
    }

    fn is_closing(&self) -> bool {
        self.inner.document.borrow().has_closing_ancestor(self.id())
    }

    fn hosts_submenu(&self) -> bool {
        self.inner.document.borrow().has_descendant(self.id(), Kind::Menu)
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();

        f.debug_struct("MenuItem")
            .field("id", &self.inner.id)
            .field("attributes", &state.attributes)
            .field("ripples", &state.ripples.len())
            .field("blinks", &state.blinks)
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl Inner {
    fn set_flag(&self, flag: Flag, on: bool) {
        let changed = self.state.borrow_mut().attributes.set_flag(flag, on);

        if !changed {
            return;
        }

        attributes::publish_flag(&mut self.document.borrow_mut(), self.id, flag, on);

        if flag == Flag::Disabled {
            self.sync_accessibility();
        }
    }
}
