//! HTML serialization of document subtrees through html5ever.

use std::io;

use html5ever::QualName;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{Document, NodeData, NodeId};
use super::predicates::is_void_tag;
use crate::error::Result;

/// A node of a [`Document`], serializable with [`html5ever::serialize`].
#[derive(Clone, Copy)]
pub struct SerializableNode<'a> {
    doc: &'a Document,
    id: NodeId,
}

enum SerializeOp {
    Open(NodeId),
    Close(QualName),
}

impl SerializableNode<'_> {
    fn push_children(&self, id: NodeId, ops: &mut Vec<SerializeOp>) {
        let start = ops.len();
        ops.extend(self.doc.children(id).map(SerializeOp::Open));
        ops[start..].reverse();
    }
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let mut ops = Vec::new();
        match traversal_scope {
            TraversalScope::IncludeNode => ops.push(SerializeOp::Open(self.id)),
            TraversalScope::ChildrenOnly(_) => self.push_children(self.id, &mut ops),
        }

        while let Some(op) = ops.pop() {
            let id = match op {
                SerializeOp::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
                SerializeOp::Open(id) => id,
            };
            let Some(node) = self.doc.get(id) else {
                continue;
            };

            match &node.data {
                NodeData::Document => self.push_children(id, &mut ops),
                NodeData::Doctype { name, .. } => serializer.write_doctype(name)?,
                NodeData::Comment(text) => serializer.write_comment(text)?,
                NodeData::Text(text) => serializer.write_text(text)?,
                NodeData::Element { name, attrs } => {
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|a| (&a.name, a.value.as_str())),
                    )?;
                    ops.push(SerializeOp::Close(name.clone()));
                    if !is_void_tag(name.local.as_ref()) {
                        self.push_children(id, &mut ops);
                    }
                }
            }
        }
        Ok(())
    }
}

impl Document {
    /// Serializable view of a node.
    pub fn serializable(&self, id: NodeId) -> SerializableNode<'_> {
        SerializableNode { doc: self, id }
    }

    /// Outer HTML of a node.
    pub fn to_html(&self, id: NodeId) -> String {
        self.render(id, TraversalScope::IncludeNode)
    }

    /// HTML of a node's children.
    ///
    /// Text under raw-text elements (`<style>`, `<script>`) is written
    /// unescaped, as in the outer form.
    pub fn inner_html(&self, id: NodeId) -> String {
        let parent = match self.get(id).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => Some(name.clone()),
            _ => None,
        };
        self.render(id, TraversalScope::ChildrenOnly(parent))
    }

    /// Stream the outer HTML of a node into a writer.
    pub fn write_html<W: io::Write>(&self, id: NodeId, mut writer: W) -> Result<()> {
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        };
        serialize(&mut writer, &self.serializable(id), opts)?;
        writer.flush()?;
        Ok(())
    }

    fn render(&self, id: NodeId, traversal_scope: TraversalScope) -> String {
        let opts = SerializeOpts {
            traversal_scope,
            ..Default::default()
        };
        let mut bytes = Vec::new();
        if serialize(&mut bytes, &self.serializable(id), opts).is_err() {
            return String::new();
        }
        String::from_utf8(bytes).unwrap_or_default()
    }
}
