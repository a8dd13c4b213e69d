//! Mirror the attributes of an item into its accessible state.
use crate::core::{Document, NodeId};

use super::Inner;

/// The role exposed by every menu item.
pub const ROLE: &str = "menuitem";

impl Inner {
    /// Publishes the role, the disabled flag and the tab order of the item.
    ///
    /// The tab index is saved once per disable edge and restored once per
    /// enable edge; repeated calls in the same state leave it alone.
    pub(super) fn sync_accessibility(&self) {
        let mut document = self.document.borrow_mut();
        let mut state = self.state.borrow_mut();
        let disabled = state.attributes.disabled;

        publish(&mut document, self.id, "role", ROLE);
        publish(
            &mut document,
            self.id,
            "aria-disabled",
            if disabled { "true" } else { "false" },
        );

        let tab_index = document.tab_index(self.id);

        if disabled {
            if state.saved_tab_index.is_none() {
                state.saved_tab_index = Some(tab_index.max(0));
            }

            if tab_index != -1 {
                document.set_tab_index(self.id, -1);
            }
        } else {
            if tab_index < 0 {
                let restored = state
                    .saved_tab_index
                    .filter(|saved| *saved > 0)
                    .unwrap_or(0);

                log::trace!("{:?}: restoring tab index {restored}", self.id);
                document.set_tab_index(self.id, restored);
            }

            state.saved_tab_index = None;
        }
    }
}

fn publish(document: &mut Document, node: NodeId, name: &str, value: &str) {
    if document.attribute(node, name) != Some(value) {
        document.set_attribute(node, name, value);
    }
}
