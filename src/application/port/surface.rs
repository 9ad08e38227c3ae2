// SPDX-License-Identifier: MPL-2.0
//! Display surface port definition.
//!
//! This module defines the [`Surface`] trait: the small slice of a DOM-like
//! tree the toast manager needs. Text only ever enters the tree through
//! [`Surface::append_text`], which creates a text node, so caller-supplied
//! strings can never become markup.

/// Handle to a node owned by a [`Surface`].
///
/// Handles carry a generation so a handle to a removed node never aliases a
/// node created later in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Creates a handle from its raw parts.
    #[must_use]
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the slot generation.
    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// A display tree capable of hosting the toast container.
///
/// All operations on a stale or foreign [`NodeId`] are no-ops (or return
/// `None`/`false`), mirroring how a browser ignores detached nodes.
pub trait Surface {
    /// Returns the root element new top-level nodes are appended to.
    fn body(&self) -> NodeId;

    /// Finds an attached element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Creates a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Sets (or replaces) an attribute on an element.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Returns an attribute value of an element.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Adds a class to an element's class list (no duplicate entries).
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Returns whether the element's class list contains `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Appends a plain text node under `parent`.
    fn append_text(&mut self, parent: NodeId, text: &str);

    /// Appends `child` as the last child of `parent`, moving it if it
    /// already has a parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Unlinks `node` from its parent, keeping it alive.
    ///
    /// Returns `true` if the node had a parent.
    fn detach(&mut self, node: NodeId) -> bool;

    /// Unlinks `node` and destroys it together with its whole subtree.
    ///
    /// Returns `true` if the node existed.
    fn remove(&mut self, node: NodeId) -> bool;

    /// Returns the parent of `node`.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Returns the children of `node` in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns whether `node` is reachable from [`Surface::body`].
    fn is_attached(&self, node: NodeId) -> bool {
        let body = self.body();
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == body {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }
}
