//! Show the submenu indicator when an item hosts a nested menu.
use crate::core::Kind;

use super::Inner;

impl Inner {
    /// Shows the submenu arrow iff the item hosts a menu and is not a menu
    /// bar entry.
    pub(super) fn update_indicator(&self) {
        let is_visible = {
            let document = self.document.borrow();
            let in_menu_bar = document
                .parent(self.id)
                .and_then(|parent| document.kind(parent))
                == Some(Kind::MenuBar);

            !in_menu_bar && document.has_descendant(self.id, Kind::Menu)
        };

        let mut state = self.state.borrow_mut();

        if state.is_indicator_visible != is_visible {
            log::trace!("{:?}: submenu indicator visible = {is_visible}", self.id);
            state.is_indicator_visible = is_visible;
        }
    }
}
