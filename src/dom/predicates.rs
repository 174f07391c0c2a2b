//! Element classification shared by the normalization passes.

use super::Tree;

/// Elements whose role is inline text semantics.
const TEXT_LEVEL_SEMANTIC_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark",
    "q", "rp", "rt", "ruby", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u",
    "var", "wbr",
];

/// Elements that cannot have content.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

fn contains_tag(set: &[&str], tag: &str) -> bool {
    set.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Check if a tag names a text-level semantic element.
pub fn is_text_level_semantic_tag(tag: &str) -> bool {
    contains_tag(TEXT_LEVEL_SEMANTIC_TAGS, tag)
}

/// Check if a tag names a void element.
pub fn is_void_tag(tag: &str) -> bool {
    contains_tag(VOID_TAGS, tag)
}

/// Check if a node is a text-level semantic element. False for non-elements.
pub fn is_text_level_semantic<T: Tree>(tree: &T, node: T::NodeId) -> bool {
    tree.tag_name(node).is_some_and(is_text_level_semantic_tag)
}

/// Check if a node is a void element. False for non-elements.
pub fn is_void<T: Tree>(tree: &T, node: T::NodeId) -> bool {
    tree.tag_name(node).is_some_and(is_void_tag)
}
