//! The menu controls of xmenu.
//!
//! A [`MenuItem`] attaches to a node of a [`core::Document`] and turns the
//! input events delivered to that node into toggles, notifications and
//! trigger effects.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use xmenu_core as core;

pub mod animation;
pub mod menu_item;
pub mod time;

pub use menu_item::MenuItem;
