//! Small tree helpers shared by the passes.

use crate::dom::Tree;

/// Check if a node has any non-whitespace text.
pub fn has_text<T: Tree>(tree: &T, node: T::NodeId) -> bool {
    !tree.text_content(node).trim().is_empty()
}

/// Next element sibling that has text, skipping empty ones.
pub fn next_non_empty_element_sibling<T: Tree>(tree: &T, node: T::NodeId) -> Option<T::NodeId> {
    let mut cursor = tree.next_element_sibling(node);
    while let Some(sibling) = cursor {
        if has_text(tree, sibling) {
            return Some(sibling);
        }
        cursor = tree.next_element_sibling(sibling);
    }
    None
}

/// Find the next non-empty element sibling, then detach `node`.
pub fn next_sibling_and_remove<T: Tree>(tree: &mut T, node: T::NodeId) -> Option<T::NodeId> {
    let next = next_non_empty_element_sibling(tree, node);
    tree.detach(node);
    next
}

/// Move the children of `source` to the end of `destination`.
///
/// A text `source` has no children to move; a copy of it is appended instead.
pub fn copy_child_nodes<T: Tree>(tree: &mut T, source: T::NodeId, destination: T::NodeId) {
    if tree.is_text(source) {
        let copy = tree.clone_node(source);
        tree.append_child(destination, copy);
        return;
    }

    while let Some(child) = tree.first_child(source) {
        tree.append_child(destination, child);
    }
}

/// Replace `source` by `destination`, handing over `source`'s children.
///
/// A parentless `source` only gives up its children.
pub fn replace_node<T: Tree>(tree: &mut T, source: T::NodeId, destination: T::NodeId) {
    copy_child_nodes(tree, source, destination);
    if let Some(parent) = tree.parent(source) {
        tree.replace_child(parent, destination, source);
    }
}

/// Detach every direct child of `node` that has no text.
pub fn remove_empty_children<T: Tree>(tree: &mut T, node: T::NodeId) {
    for child in tree.children(node).into_iter().rev() {
        if !has_text(tree, child) {
            tree.detach(child);
        }
    }
}

/// Unwrap `node`: splice its children into its parent at its position, then
/// detach it. No-op for parentless nodes.
pub fn remove_shallow<T: Tree>(tree: &mut T, node: T::NodeId) {
    let Some(parent) = tree.parent(node) else {
        return;
    };
    while let Some(child) = tree.first_child(node) {
        tree.insert_before(parent, child, Some(node));
    }
    tree.detach(node);
}

/// Strip every attribute from `node`.
pub fn remove_all_attributes<T: Tree>(tree: &mut T, node: T::NodeId) {
    for name in tree.attribute_names(node).into_iter().rev() {
        tree.remove_attribute(node, &name);
    }
}

/// Wrap sibling nodes in a new `tag` element placed where the first of them
/// was. Returns the wrapper, or `None` for an empty slice or a parentless
/// first node.
pub fn wrap_child_nodes<T: Tree>(
    tree: &mut T,
    nodes: &[T::NodeId],
    tag: &str,
) -> Option<T::NodeId> {
    let first = *nodes.first()?;
    let parent = tree.parent(first)?;

    let wrapper = tree.create_element(tag);
    tree.insert_before(parent, wrapper, Some(first));
    for &node in nodes {
        tree.append_child(wrapper, node);
    }
    Some(wrapper)
}
