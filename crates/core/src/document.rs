//! A tree of elements hosting menu controls.
//!
//! The [`Document`] is the substrate menu controls live in: it owns the
//! element hierarchy, the reflected string attributes (with a log of every
//! attribute and child list mutation), the inherited custom style
//! properties, focus, pointer capture, and the notification listeners.
use crate::Rectangle;
use crate::mouse::PointerId;

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

slotmap::new_key_type! {
    /// The identifier of a node in a [`Document`].
    pub struct NodeId;
}

/// The kind of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A menu item (`x-menuitem`).
    MenuItem,
    /// A menu container (`x-menu`).
    Menu,
    /// A menu bar container (`x-menubar`).
    MenuBar,
    /// Any other element.
    Generic,
}

/// The attribute marking a container that is dismissing itself.
pub const CLOSING: &str = "closing";

/// A change made to the [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// The node that changed.
    pub target: NodeId,
    /// What changed.
    pub kind: MutationKind,
}

/// The kind of a [`Mutation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    /// The attribute with the given name was set or removed.
    Attribute(String),
    /// A child was added or removed.
    ChildList,
}

/// The kind of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// The toggled state of an item is about to flip.
    Toggle,
    /// An item was clicked.
    Click,
}

/// A notification dispatched through the [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    target: NodeId,
    current: NodeId,
    bubbles: bool,
    cancelable: bool,
    is_default_prevented: bool,
    is_propagation_stopped: bool,
}

impl Notification {
    /// Creates a new [`Notification`] targeting the given node.
    pub fn new(kind: NotificationKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current: target,
            bubbles: false,
            cancelable: false,
            is_default_prevented: false,
            is_propagation_stopped: false,
        }
    }

    /// A bubbling, cancelable [`NotificationKind::Toggle`].
    pub fn toggle(target: NodeId) -> Self {
        Self::new(NotificationKind::Toggle, target)
            .bubbles(true)
            .cancelable(true)
    }

    /// A bubbling, cancelable [`NotificationKind::Click`].
    pub fn click(target: NodeId) -> Self {
        Self::new(NotificationKind::Click, target)
            .bubbles(true)
            .cancelable(true)
    }

    /// Sets whether the [`Notification`] travels up the ancestors of its target.
    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    /// Sets whether listeners may cancel the [`Notification`].
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Returns the [`NotificationKind`].
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the node the [`Notification`] was dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the node whose listeners are currently running.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Cancels the default action, if the [`Notification`] is cancelable.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.is_default_prevented = true;
        }
    }

    /// Returns true if a listener canceled the default action.
    pub fn is_default_prevented(&self) -> bool {
        self.is_default_prevented
    }

    /// Keeps the [`Notification`] from reaching further ancestors.
    pub fn stop_propagation(&mut self) {
        self.is_propagation_stopped = true;
    }

    /// Returns true if a listener stopped propagation.
    pub fn is_propagation_stopped(&self) -> bool {
        self.is_propagation_stopped
    }
}

/// A notification listener.
pub type Listener = Rc<RefCell<dyn FnMut(&mut Notification)>>;

struct Node {
    kind: Kind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    bounds: Rectangle,
    listeners: Vec<(NotificationKind, Listener)>,
}

impl Node {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            properties: BTreeMap::new(),
            bounds: Rectangle::default(),
            listeners: Vec::new(),
        }
    }
}

/// A tree of elements.
#[derive(Default)]
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    focused: Option<NodeId>,
    captures: FxHashMap<PointerId, NodeId>,
    mutations: Vec<Mutation>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("focused", &self.focused)
            .field("captures", &self.captures)
            .field("mutations", &self.mutations)
            .finish()
    }
}

impl Document {
    /// Creates an empty [`Document`].
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------------

    /// Creates a detached node of the given [`Kind`].
    pub fn create(&mut self, kind: Kind) -> NodeId {
        self.nodes.insert(Node::new(kind))
    }

    /// Returns true if the node exists.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Appends `child` to `parent`, moving it out of its previous parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }

        if self.is_inclusive_ancestor(child, parent) {
            log::warn!("refusing to append {child:?} into its own descendant {parent:?}");
            return;
        }

        self.detach(child);

        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        self.record(parent, MutationKind::ChildList);
    }

    /// Removes a node and all of its descendants.
    pub fn remove(&mut self, node: NodeId) {
        if !self.contains(node) {
            return;
        }

        self.detach(node);

        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            if let Some(removed) = self.nodes.remove(current) {
                stack.extend(removed.children);
            }

            if self.focused == Some(current) {
                self.focused = None;
            }

            self.captures.retain(|_, target| *target != current);
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(node).and_then(|node| node.parent.take()) else {
            return;
        };

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|child| *child != node);
            self.record(parent, MutationKind::ChildList);
        }
    }

    /// Returns the [`Kind`] of a node.
    pub fn kind(&self, node: NodeId) -> Option<Kind> {
        self.nodes.get(node).map(|node| node.kind)
    }

    /// Returns the parent of a node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|node| node.parent)
    }

    /// Returns the children of a node.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns an iterator over the ancestors of a node, closest first.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.parent(node),
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|current| current == ancestor)
    }

    /// Returns the closest inclusive ancestor of a node of the given [`Kind`].
    pub fn closest(&self, node: NodeId, kind: Kind) -> Option<NodeId> {
        if self.kind(node)? == kind {
            return Some(node);
        }

        self.ancestors(node)
            .find(|ancestor| self.kind(*ancestor) == Some(kind))
    }

    /// Returns true if any descendant of a node has the given [`Kind`].
    pub fn has_descendant(&self, node: NodeId, kind: Kind) -> bool {
        let mut stack: Vec<NodeId> = self.children(node).to_vec();

        while let Some(current) = stack.pop() {
            if self.kind(current) == Some(kind) {
                return true;
            }

            stack.extend_from_slice(self.children(current));
        }

        false
    }

    /// Returns true if any ancestor of a node carries the [`CLOSING`] attribute.
    pub fn has_closing_ancestor(&self, node: NodeId) -> bool {
        self.ancestors(node)
            .any(|ancestor| self.has_attribute(ancestor, CLOSING))
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    /// Returns the value of an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node)
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }

    /// Returns true if the node carries the attribute.
    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Sets an attribute.
    ///
    /// A [`Mutation`] is recorded even if the value does not change.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let Some(entry) = self.nodes.get_mut(node) else {
            return;
        };

        let _previous = entry.attributes.insert(name.to_owned(), value.into());
        self.record(node, MutationKind::Attribute(name.to_owned()));
    }

    /// Removes an attribute.
    ///
    /// A [`Mutation`] is only recorded if the attribute was present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let removed = self
            .nodes
            .get_mut(node)
            .and_then(|entry| entry.attributes.remove(name));

        if removed.is_some() {
            self.record(node, MutationKind::Attribute(name.to_owned()));
        }
    }

    /// Returns the tab index of a node.
    ///
    /// Nodes without a valid `tabindex` attribute are not in the tab order.
    pub fn tab_index(&self, node: NodeId) -> i32 {
        self.attribute(node, "tabindex")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(-1)
    }

    /// Sets the tab index of a node.
    pub fn set_tab_index(&mut self, node: NodeId, tab_index: i32) {
        self.set_attribute(node, "tabindex", tab_index.to_string());
    }

    // ------------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------------

    /// Sets a custom style property on a node.
    pub fn set_property(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(entry) = self.nodes.get_mut(node) {
            let _previous = entry.properties.insert(name.to_owned(), value.into());
        }
    }

    /// Removes a custom style property from a node.
    pub fn remove_property(&mut self, node: NodeId, name: &str) {
        if let Some(entry) = self.nodes.get_mut(node) {
            let _previous = entry.properties.remove(name);
        }
    }

    /// Returns the computed value of a custom style property.
    ///
    /// Custom properties are inherited: the value set on the closest
    /// inclusive ancestor wins.
    pub fn computed_property(&self, node: NodeId, name: &str) -> Option<&str> {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find_map(|current| self.nodes.get(current)?.properties.get(name))
            .map(String::as_str)
    }

    /// Returns the bounds of a node, in client coordinates.
    pub fn bounds(&self, node: NodeId) -> Rectangle {
        self.nodes
            .get(node)
            .map(|node| node.bounds)
            .unwrap_or_default()
    }

    /// Sets the bounds of a node.
    pub fn set_bounds(&mut self, node: NodeId, bounds: Rectangle) {
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.bounds = bounds;
        }
    }

    // ------------------------------------------------------------------------
    // Focus and pointer capture
    // ------------------------------------------------------------------------

    /// Moves focus to a node.
    pub fn focus(&mut self, node: NodeId) {
        if self.contains(node) {
            self.focused = Some(node);
        }
    }

    /// Clears focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Returns the focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Routes all future events of a pointer to a node.
    pub fn set_pointer_capture(&mut self, node: NodeId, pointer: PointerId) {
        if self.contains(node) {
            let _previous = self.captures.insert(pointer, node);
        }
    }

    /// Releases the capture of a pointer, returning the node that held it.
    pub fn release_pointer_capture(&mut self, pointer: PointerId) -> Option<NodeId> {
        self.captures.remove(&pointer)
    }

    /// Returns the node capturing a pointer.
    pub fn pointer_capture(&self, pointer: PointerId) -> Option<NodeId> {
        self.captures.get(&pointer).copied()
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    /// Registers a [`Listener`] for notifications of the given kind reaching
    /// a node.
    pub fn add_listener(
        &mut self,
        node: NodeId,
        kind: NotificationKind,
        listener: impl FnMut(&mut Notification) + 'static,
    ) {
        if let Some(entry) = self.nodes.get_mut(node) {
            let listener: Listener = Rc::new(RefCell::new(listener));

            entry.listeners.push((kind, listener));
        }
    }

    /// Dispatches a [`Notification`] to its target and, if it bubbles, to
    /// each of the target's ancestors.
    ///
    /// The document is only borrowed to resolve the path and the listeners
    /// of each node; listeners run with the document released, so they may
    /// read or mutate it, or call back into the controls living in it.
    ///
    /// Returns the notification once every listener has seen it.
    pub fn dispatch(document: &RefCell<Self>, mut notification: Notification) -> Notification {
        let path: Vec<NodeId> = {
            let document = document.borrow();
            let target = notification.target;

            if notification.bubbles {
                std::iter::once(target)
                    .chain(document.ancestors(target))
                    .collect()
            } else {
                vec![target]
            }
        };

        for current in path {
            let listeners: Vec<Listener> = {
                let document = document.borrow();

                let Some(node) = document.nodes.get(current) else {
                    continue;
                };

                node.listeners
                    .iter()
                    .filter(|(kind, _)| *kind == notification.kind)
                    .map(|(_, listener)| Rc::clone(listener))
                    .collect()
            };

            notification.current = current;

            for listener in listeners {
                let Ok(mut listener) = listener.try_borrow_mut() else {
                    log::warn!("skipping a listener of {current:?} that is already running");
                    continue;
                };

                (&mut *listener)(&mut notification);
            }

            if notification.is_propagation_stopped {
                break;
            }
        }

        notification
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    fn record(&mut self, target: NodeId, kind: MutationKind) {
        self.mutations.push(Mutation { target, kind });
    }

    /// Returns the mutations recorded so far.
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Drains the mutations recorded so far.
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }
}

/// An iterator over the ancestors of a node.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.document.parent(current);

        Some(current)
    }
}
