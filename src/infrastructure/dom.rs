// SPDX-License-Identifier: MPL-2.0
//! In-memory document tree implementing the [`Surface`] port.
//!
//! Nodes live in a slot arena. Removing a node frees its whole subtree and
//! bumps the slot generation, so stale [`NodeId`]s are simply ignored.
//! Serialization escapes every text node and attribute value with
//! [`escape_html`].
//!
//! `id` attributes are indexed, so [`Surface::element_by_id`] does not walk
//! the tree.

use crate::application::port::{NodeId, Surface};
use std::collections::HashMap;

const BODY_TAG: &str = "body";
const ID_ATTRIBUTE: &str = "id";

/// Escapes text so it can be embedded in HTML content or attribute values.
///
/// The rest of the client uses this for feed and admin strings, too.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A minimal DOM: elements with attributes, text nodes, and a `body` root.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    body: NodeId,
    /// Live elements by `id` attribute, in assignment order.
    ids: HashMap<String, Vec<NodeId>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self {
            slots: Vec::new(),
            free: Vec::new(),
            body: NodeId::new(0, 0),
            ids: HashMap::new(),
        };
        document.body = document.insert(NodeData::Element {
            tag: BODY_TAG.to_string(),
            attributes: Vec::new(),
        });
        document
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        let node = Node {
            data,
            parent: None,
            children: Vec::new(),
        };
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            NodeId::new(index, slot.generation)
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId::new(self.slots.len() - 1, 0)
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    fn attributes_mut(&mut self, id: NodeId) -> Option<&mut Vec<(String, String)>> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element { attributes, .. } => Some(attributes),
            NodeData::Text(_) => None,
        }
    }

    fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.node(id).map(|node| &node.data),
            Some(NodeData::Element { .. })
        )
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.node(candidate).and_then(|n| n.parent);
        }
        false
    }

    fn free_subtree(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(slot) = self.slots.get_mut(id.index()) else {
                continue;
            };
            if slot.generation != id.generation() {
                continue;
            }
            if let Some(node) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index());
                if let NodeData::Element { attributes, .. } = &node.data {
                    if let Some((_, value)) = attributes.iter().find(|(n, _)| n == ID_ATTRIBUTE) {
                        self.unindex_id(value, id);
                    }
                }
                stack.extend(node.children);
            }
        }
    }

    fn unindex_id(&mut self, value: &str, node: NodeId) {
        if let Some(nodes) = self.ids.get_mut(value) {
            nodes.retain(|n| *n != node);
            if nodes.is_empty() {
                self.ids.remove(value);
            }
        }
    }

    /// Returns the tag name of an element, or `None` for text nodes.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    /// Returns the concatenated text of `node` and all its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(node, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(value) => out.push_str(value),
            NodeData::Element { .. } => {
                for child in &node.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Returns every descendant of `node` in document order (excluding `node`).
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(node)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            if let Some(n) = self.node(id) {
                found.push(id);
                stack.extend(n.children.iter().rev().copied());
            }
        }
        found
    }

    /// Returns every attached element with the given tag name.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|id| self.tag(*id).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Returns the first descendant of `node` carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|id| self.has_class(*id, class))
    }

    /// Returns the number of live nodes, `<body>` included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    /// Serializes `node` and its subtree as HTML.
    #[must_use]
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut html = String::new();
        self.write_html(node, &mut html);
        html
    }

    /// Serializes the children of `node` as HTML.
    #[must_use]
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut html = String::new();
        for child in self.children(node) {
            self.write_html(child, &mut html);
        }
        html
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(value) => out.push_str(&escape_html(value)),
            NodeData::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                for child in &node.children {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl Surface for Document {
    fn body(&self) -> NodeId {
        self.body
    }

    /// Duplicate ids resolve to the attached element that got the id first.
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids
            .get(id)?
            .iter()
            .copied()
            .find(|node| self.is_ancestor_or_self(self.body, *node))
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.insert(NodeData::Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(attributes) = self.attributes_mut(node) else {
            return;
        };
        let previous = if let Some(entry) = attributes.iter_mut().find(|(n, _)| n == name) {
            Some(std::mem::replace(&mut entry.1, value.to_string()))
        } else {
            attributes.push((name.to_string(), value.to_string()));
            None
        };
        if name == ID_ATTRIBUTE && previous.as_deref() != Some(value) {
            if let Some(old) = previous {
                self.unindex_id(&old, node);
            }
            self.ids.entry(value.to_string()).or_default().push(node);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if class.trim().is_empty() || self.has_class(node, class) || !self.is_element(node) {
            return;
        }
        let updated = match self.attribute(node, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute(node, "class", &updated);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn append_text(&mut self, parent: NodeId, text: &str) {
        if !self.is_element(parent) {
            return;
        }
        let child = self.insert(NodeData::Text(text.to_string()));
        self.append_child(parent, child);
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_element(parent)
            || self.node(child).is_none()
            || child == self.body
            || self.is_ancestor_or_self(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return false;
        };
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.retain(|c| *c != node);
        }
        if let Some(n) = self.node_mut(node) {
            n.parent = None;
        }
        true
    }

    fn remove(&mut self, node: NodeId) -> bool {
        if node == self.body || self.node(node).is_none() {
            return false;
        }
        self.detach(node);
        self.free_subtree(node);
        true
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }
}
