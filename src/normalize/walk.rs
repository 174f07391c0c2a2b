//! Mutation-safe descendant traversal.

use crate::dom::Tree;

use super::helpers::remove_shallow;

/// Visit every descendant of `root` and run `action` on those matching
/// `predicate`.
///
/// `root` itself is never visited. Children are visited last to first so an
/// action may detach, unwrap or replace the node it is handed without
/// disturbing the siblings still to be visited:
///
/// - If the node is still in its place after the action, the walker descends
///   into it (when it is an element).
/// - If the action put other nodes in its place (an unwrap splicing in
///   children, a replacement), the walker examines each new node, last
///   first. Stale, displaced nodes are not descended into.
/// - If the node was simply removed, the walker moves on. Siblings that were
///   already visited are never visited again.
///
/// Apart from `predicate` and `action`, each visit is a constant number of
/// sibling lookups, so a walk is linear in the size of the subtree.
///
/// The action must only touch the node it is handed (and that node's
/// subtree). Panics in `predicate` or `action` leave the tree partially
/// mutated.
pub fn walk_descendants<T, P, A>(tree: &mut T, root: T::NodeId, mut predicate: P, mut action: A)
where
    T: Tree,
    P: FnMut(&T, T::NodeId) -> bool,
    A: FnMut(&mut T, T::NodeId),
{
    walk_children(tree, root, &mut predicate, &mut action);
}

fn walk_children<T, P, A>(tree: &mut T, parent: T::NodeId, predicate: &mut P, action: &mut A)
where
    T: Tree,
    P: FnMut(&T, T::NodeId) -> bool,
    A: FnMut(&mut T, T::NodeId),
{
    let mut cursor = tree.last_child(parent);
    while let Some(child) = cursor {
        // Neighbours are outside the action's reach, so they bound the slot
        // `child` occupies whatever the action does to it.
        let prev = tree.previous_sibling(child);
        let next = tree.next_sibling(child);

        if predicate(tree, child) {
            action(tree, child);

            let occupant = match prev {
                Some(prev) => tree.next_sibling(prev),
                None => tree.first_child(parent),
            };
            if occupant != Some(child) {
                // Resume at the last node now in the slot; an empty slot
                // leaves the cursor on `prev`.
                cursor = match next {
                    Some(next) => tree.previous_sibling(next),
                    None => tree.last_child(parent),
                };
                continue;
            }
        }

        if tree.is_element(child) {
            walk_children(tree, child, predicate, action);
        }
        cursor = prev;
    }
}

/// Detach every descendant of `root` matching `predicate`, with its subtree.
pub fn remove_descendants<T, P>(tree: &mut T, root: T::NodeId, predicate: P)
where
    T: Tree,
    P: FnMut(&T, T::NodeId) -> bool,
{
    walk_descendants(tree, root, predicate, |tree, node| tree.detach(node));
}

/// Replace every descendant of `root` matching `predicate` by its children.
pub fn unwrap_descendants<T, P>(tree: &mut T, root: T::NodeId, predicate: P)
where
    T: Tree,
    P: FnMut(&T, T::NodeId) -> bool,
{
    walk_descendants(tree, root, predicate, remove_shallow);
}
