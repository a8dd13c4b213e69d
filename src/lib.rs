//! xmenu provides the interactive item of a menu: a control that reflects its
//! attributes into accessible state, shows a submenu indicator when it hosts
//! a nested menu, and plays a ripple or a blink every time it is activated.
//!
//! Menu items live in a [`Document`], a small tree of typed nodes carrying
//! attributes, style properties, focus and pointer captures. A host creates
//! the nodes, attaches a [`MenuItem`] to each item node and forwards the
//! input events of that node to [`MenuItem::update`].
//!
//! Trigger effects suspend on animations and timers. The host provides both
//! through the [`Animator`] and [`Timer`] traits, and drives the [`Effect`]s
//! handed over through the [`Shell`] on a local executor.
//!
//! # Example
//! ```no_run
//! use xmenu::{Document, Kind, MenuItem, Shell};
//! use xmenu::animation::Delay;
//! use xmenu::time::Timer;
//! use xmenu::mouse::Button;
//!
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! # fn run(timer: impl Timer + Clone + 'static) {
//! let document = Rc::new(RefCell::new(Document::new()));
//!
//! let (menu, item) = {
//!     let mut document = document.borrow_mut();
//!     let menu = document.create(Kind::Menu);
//!     let item = document.create(Kind::MenuItem);
//!
//!     document.append(menu, item);
//!     (menu, item)
//! };
//!
//! let item = MenuItem::new(document.clone(), item, Delay::new(timer.clone()), timer);
//! item.set_togglable(true);
//! item.connect();
//!
//! let mut effects = Vec::new();
//! let mut shell = Shell::new(&mut effects);
//!
//! item.on_click(Button::Left, item.id(), &mut shell);
//! assert!(item.toggled());
//! # let _ = menu;
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use xmenu_core as core;
pub use xmenu_widget as widget;

pub use crate::core::document;
pub use crate::core::style;
pub use crate::core::{
    Document, Effect, Error, Event, Kind, NodeId, Point, Rectangle, Result, Settings, Shell, Size,
    TriggerEffect,
};
pub use crate::core::{Animator, Easing, Timer, Transition};
pub use widget::MenuItem;

pub mod animation {
    //! Animate the trigger effects of menu items.
    pub use crate::core::animation::{Animation, Animator, Easing, Property, Transition};
    pub use crate::widget::animation::Delay;
}

pub mod time {
    //! Wait on timers.
    pub use crate::widget::time::*;
}

pub mod event {
    //! Handle events of a menu control.
    pub use crate::core::event::{Event, Status};
}

pub mod keyboard {
    //! React to keyboard events.
    pub use crate::core::keyboard::{Code, Event};
}

pub mod mouse {
    //! React to pointer events.
    pub use crate::core::mouse::{Button, Buttons, Event, PointerId};
}

pub mod menu_item {
    //! The parts of a menu item.
    pub use crate::widget::menu_item::*;
}

#[cfg(feature = "accessibility")]
pub mod accessibility {
    //! Describe menu items to assistive technologies.
    pub use crate::core::accessibility::*;
}
