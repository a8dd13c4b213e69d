//! The core library of [xmenu].
//!
//! This library holds basic types that can be reused and re-exported in
//! different xmenu crates: geometry, input events, the element [`Document`]
//! menu controls live in, and the traits through which they reach the
//! animation and timing primitives of their host.
//!
//! [xmenu]: https://github.com/xmenu-rs/xmenu
//! [`Document`]: document::Document
#![cfg_attr(docsrs, feature(doc_cfg))]
#[cfg(feature = "accessibility")]
pub mod accessibility;
pub mod animation;
pub mod document;
pub mod event;
pub mod keyboard;
pub mod mouse;
pub mod settings;
pub mod style;
pub mod time;

mod error;
mod point;
mod rectangle;
mod shell;
mod size;

pub use animation::{Animation, Animator, Easing, Transition};
pub use document::{Document, Kind, NodeId};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use rectangle::Rectangle;
pub use settings::Settings;
pub use shell::{Effect, Shell};
pub use size::Size;
pub use style::TriggerEffect;
pub use time::Timer;

/// The result of a fallible xmenu operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;
