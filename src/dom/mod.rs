//! Host tree interface and the bundled arena host.
//!
//! The normalization passes never touch a concrete DOM. They operate on any
//! type implementing [`Tree`], a small capability interface covering
//! structural queries, attribute access, text extraction and the handful of
//! mutations the passes need (append, insert, detach). [`Document`] is the
//! arena-backed implementation shipped with the crate.

mod arena;
pub mod predicates;
mod serialize;
mod tree_sink;

use std::fmt;

pub use arena::{Attribute, Document, Node, NodeData, NodeId};
pub use serialize::SerializableNode;
pub use predicates::{is_text_level_semantic, is_text_level_semantic_tag, is_void, is_void_tag};

/// Coarse node classification used by the passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Document roots, comments, doctypes.
    Other,
}

/// Capability interface over a mutable host tree.
///
/// Nodes are addressed by copyable handles. Handles must stay stable while a
/// node moves around the tree, since the walker compares them to detect that
/// an action replaced the node at a position.
///
/// Mutations that attach a node (`append_child`, `insert_before`) move it:
/// a node that already has a parent is detached from it first.
pub trait Tree {
    type NodeId: Copy + Eq + fmt::Debug;

    fn kind(&self, node: Self::NodeId) -> NodeKind;

    /// Lowercase tag name for elements, `None` otherwise.
    fn tag_name(&self, node: Self::NodeId) -> Option<&str>;

    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;
    fn first_child(&self, node: Self::NodeId) -> Option<Self::NodeId>;
    fn last_child(&self, node: Self::NodeId) -> Option<Self::NodeId>;
    fn next_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId>;
    fn previous_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Names of the node's attributes, in document order.
    fn attribute_names(&self, node: Self::NodeId) -> Vec<String>;
    fn remove_attribute(&mut self, node: Self::NodeId, name: &str);

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self, node: Self::NodeId) -> String;

    /// Create a detached, empty element.
    fn create_element(&mut self, tag: &str) -> Self::NodeId;

    /// Deep copy of `node`, detached.
    fn clone_node(&mut self, node: Self::NodeId) -> Self::NodeId;

    fn append_child(&mut self, parent: Self::NodeId, child: Self::NodeId);

    /// Insert `child` before `reference`, or append when `reference` is `None`.
    fn insert_before(
        &mut self,
        parent: Self::NodeId,
        child: Self::NodeId,
        reference: Option<Self::NodeId>,
    );

    /// Unlink `node` from its parent. No-op for parentless nodes.
    fn detach(&mut self, node: Self::NodeId);

    fn is_element(&self, node: Self::NodeId) -> bool {
        self.kind(node) == NodeKind::Element
    }

    fn is_text(&self, node: Self::NodeId) -> bool {
        self.kind(node) == NodeKind::Text
    }

    /// Snapshot of the node's children.
    fn children(&self, node: Self::NodeId) -> Vec<Self::NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.first_child(node);
        while let Some(child) = cursor {
            out.push(child);
            cursor = self.next_sibling(child);
        }
        out
    }

    fn child_count(&self, node: Self::NodeId) -> usize {
        let mut count = 0;
        let mut cursor = self.first_child(node);
        while let Some(child) = cursor {
            count += 1;
            cursor = self.next_sibling(child);
        }
        count
    }

    fn next_element_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId> {
        let mut cursor = self.next_sibling(node);
        while let Some(sibling) = cursor {
            if self.is_element(sibling) {
                return Some(sibling);
            }
            cursor = self.next_sibling(sibling);
        }
        None
    }

    /// Put `new_child` where `old_child` is and detach `old_child`.
    fn replace_child(
        &mut self,
        parent: Self::NodeId,
        new_child: Self::NodeId,
        old_child: Self::NodeId,
    ) {
        if new_child == old_child {
            return;
        }
        self.insert_before(parent, new_child, Some(old_child));
        self.detach(old_child);
    }
}
