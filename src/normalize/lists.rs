//! Nested list reconstruction.
//!
//! Word processors export list items as flat paragraphs carrying their
//! nesting depth as metadata (`mso-list: l0 level2 lfo1`) instead of real
//! nesting. Given each item's level, [`create_nested_list`] moves a cursor
//! container up and down a chain of list containers, creating the ones that
//! are missing, so that items land at their declared depth.
//!
//! ```
//! use paste_clean::{Document, Tree, create_nested_list};
//!
//! let mut doc = Document::new();
//! let root = doc.create_html_element("ul", &[]);
//!
//! let deep = create_nested_list(&mut doc, 2, 0, root, |doc: &mut Document| {
//!     Tree::create_element(doc, "ul")
//! });
//!
//! assert_eq!(doc.to_html(root), "<ul><ul><ul></ul></ul></ul>");
//! assert_eq!(doc.parent(doc.parent(deep).unwrap()), Some(root));
//! ```

use std::fmt;

use tracing::trace;

use crate::dom::Tree;
use crate::error::{Error, Result};

/// Return the container that should receive an item at `current_level`,
/// given that `container` holds items at `previous_level`.
///
/// Going deeper, one fresh container per level is appended as the last child
/// of the current one. Going shallower, the cursor moves to the parent; a
/// parentless container is first wrapped in a fresh one so there is always a
/// level to climb to. Levels move one step at a time, so multi-level jumps
/// build every intermediate container.
///
/// `create_container` makes an empty container of the host's list type.
pub fn create_nested_list<T, F>(
    tree: &mut T,
    current_level: usize,
    previous_level: usize,
    container: T::NodeId,
    mut create_container: F,
) -> T::NodeId
where
    T: Tree,
    F: FnMut(&mut T) -> T::NodeId,
{
    let mut list = container;
    let mut level = previous_level;

    while current_level > level {
        let nested = create_container(tree);
        tree.append_child(list, nested);
        list = nested;
        level += 1;
        trace!(depth = level, "descended into new list container");
    }

    while current_level < level {
        list = match tree.parent(list) {
            Some(parent) => parent,
            None => {
                let wrapper = create_container(tree);
                tree.append_child(wrapper, list);
                trace!(depth = level, "wrapped root list container");
                wrapper
            }
        };
        level -= 1;
        trace!(depth = level, "ascended to parent list container");
    }

    list
}

/// Running state for rebuilding one list from a stream of `(level, item)`
/// pairs.
///
/// The root container is treated as sitting at `root_level` (0 unless built
/// with [`ListBuilder::with_level`]). Pushing an item shallower than the root
/// wraps the root, and the wrapper becomes the new root.
#[derive(Debug, Clone)]
pub struct ListBuilder<N> {
    root: N,
    root_level: usize,
    container: N,
    level: usize,
}

impl<N: Copy + Eq + fmt::Debug> ListBuilder<N> {
    /// Start a rebuild at level 0 in `root`.
    pub fn new<T>(tree: &T, root: N) -> Result<Self>
    where
        T: Tree<NodeId = N>,
    {
        Self::with_level(tree, root, 0)
    }

    /// Start a rebuild in `root`, treating it as holding items at `level`.
    pub fn with_level<T>(tree: &T, root: N, level: usize) -> Result<Self>
    where
        T: Tree<NodeId = N>,
    {
        if !tree.is_element(root) {
            return Err(Error::NotAnElement(format!("{root:?}")));
        }
        Ok(Self {
            root,
            root_level: level,
            container: root,
            level,
        })
    }

    /// Append `item` at `level` and return the container it went into.
    pub fn push<T, F>(&mut self, tree: &mut T, level: usize, item: N, create_container: F) -> N
    where
        T: Tree<NodeId = N>,
        F: FnMut(&mut T) -> N,
    {
        self.container =
            create_nested_list(tree, level, self.level, self.container, create_container);
        tree.append_child(self.container, item);
        self.level = level;

        if level < self.root_level {
            // Climbing above the root wrapped it; the cursor is the topmost wrapper.
            self.root = self.container;
            self.root_level = level;
        }
        self.container
    }

    /// Container that received the last item.
    pub fn container(&self) -> N {
        self.container
    }

    /// Level of the last item.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Topmost container of the rebuilt list.
    pub fn root(&self) -> N {
        self.root
    }

    /// Finish the rebuild and return the topmost container.
    pub fn finish(self) -> N {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, NodeId};

    fn make_list(doc: &mut Document) -> NodeId {
        doc.create_html_element("ul", &[])
    }

    fn item(doc: &mut Document, text: &str) -> NodeId {
        let li = doc.create_html_element("li", &[]);
        doc.append_text(li, text);
        li
    }

    fn depth_below(doc: &Document, node: NodeId, ancestor: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut cursor = node;
        while cursor != ancestor {
            cursor = doc.parent(cursor)?;
            depth += 1;
        }
        Some(depth)
    }

    #[test]
    fn test_same_level_returns_container() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);

        assert_eq!(create_nested_list(&mut doc, 1, 1, root, make_list), root);
        assert_eq!(doc.children(root).count(), 0);
    }

    #[test]
    fn test_descend_two_levels() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);

        let list = create_nested_list(&mut doc, 2, 0, root, make_list);

        assert_eq!(depth_below(&doc, list, root), Some(2));
        assert_eq!(doc.to_html(root), "<ul><ul><ul></ul></ul></ul>");
    }

    #[test]
    fn test_descend_appends_after_existing_items() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);
        let first = item(&mut doc, "a");
        doc.append(root, first);

        let nested = create_nested_list(&mut doc, 1, 0, root, make_list);

        assert_eq!(doc.children(root).collect::<Vec<_>>(), vec![first, nested]);
    }

    #[test]
    fn test_ascend_to_parent() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);
        let deep = create_nested_list(&mut doc, 2, 0, root, make_list);

        let back = create_nested_list(&mut doc, 0, 2, deep, make_list);

        assert_eq!(back, root);
        assert_eq!(doc.to_html(root), "<ul><ul><ul></ul></ul></ul>");
    }

    #[test]
    fn test_ascend_from_parentless_wraps() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);
        let first = item(&mut doc, "deep");
        doc.append(root, first);

        let top = create_nested_list(&mut doc, 0, 2, root, make_list);

        assert_ne!(top, root);
        assert_eq!(depth_below(&doc, root, top), Some(2));
        assert_eq!(doc.to_html(top), "<ul><ul><ul><li>deep</li></ul></ul></ul>");
    }

    #[test]
    fn test_level_sequence_builds_one_tree() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);
        let mut builder = ListBuilder::new(&doc, root).unwrap();

        for (level, text) in [(0, "a"), (1, "b"), (2, "c"), (1, "d"), (0, "e")] {
            let li = item(&mut doc, text);
            builder.push(&mut doc, level, li, make_list);
        }

        assert_eq!(builder.level(), 0);
        assert_eq!(builder.container(), root);
        assert_eq!(builder.finish(), root);
        assert_eq!(
            doc.to_html(root),
            "<ul><li>a</li><ul><li>b</li><ul><li>c</li></ul><li>d</li></ul><li>e</li></ul>"
        );
    }

    #[test]
    fn test_siblings_at_same_depth_share_container() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);
        let mut builder = ListBuilder::new(&doc, root).unwrap();

        let mut containers = Vec::new();
        for (level, text) in [(1, "a"), (1, "b"), (0, "c"), (1, "d")] {
            let li = item(&mut doc, text);
            containers.push(builder.push(&mut doc, level, li, make_list));
        }

        assert_eq!(containers[0], containers[1]);
        assert_eq!(containers[2], root);
        // returning to level 1 after level 0 opens a fresh nested list
        assert_ne!(containers[3], containers[0]);
        assert_eq!(
            doc.to_html(root),
            "<ul><ul><li>a</li><li>b</li></ul><li>c</li><ul><li>d</li></ul></ul>"
        );
    }

    #[test]
    fn test_builder_starting_deep_rewraps_root() {
        let mut doc = Document::new();
        let root = make_list(&mut doc);
        let mut builder = ListBuilder::with_level(&doc, root, 1).unwrap();

        let a = item(&mut doc, "a");
        builder.push(&mut doc, 1, a, make_list);
        let b = item(&mut doc, "b");
        builder.push(&mut doc, 0, b, make_list);

        let top = builder.finish();
        assert_ne!(top, root);
        assert_eq!(doc.parent(top), None);
        assert_eq!(doc.to_html(top), "<ul><ul><li>a</li></ul><li>b</li></ul>");
    }

    #[test]
    fn test_builder_rejects_text_root() {
        let mut doc = Document::new();
        let text = doc.create_text("not a list".into());

        let err = ListBuilder::new(&doc, text).unwrap_err();
        assert!(matches!(err, Error::NotAnElement(_)));
    }
}
