//! # paste-clean
//!
//! Normalizes markup pasted from word processors into clean, semantically
//! minimal HTML for a rich-text editor.
//!
//! ## Features
//!
//! - Mutation-safe tree walking: actions may remove, unwrap or replace the
//!   node they are handed while the walk continues
//! - Structural cleaning: presentation wrappers unwrapped, noise attributes
//!   stripped, empty inline elements collapsed
//! - Nested list rebuilding from flat `(level, item)` streams
//! - Works over any host tree implementing [`Tree`]; an html5ever-backed
//!   arena [`Document`] is included
//!
//! ## Quick Start
//!
//! ```
//! use paste_clean::{Document, clean_element};
//!
//! let mut doc = Document::parse_html(
//!     r#"<p class="MsoNormal"><font face="Arial"><b>Hi</b></font><i></i></p>"#,
//! );
//! let p = doc.find_by_tag("p").unwrap();
//!
//! clean_element(&mut doc, p);
//!
//! assert_eq!(doc.to_html(p), "<p><b>Hi</b></p>");
//! ```
//!
//! ## Rebuilding Lists
//!
//! ```
//! use paste_clean::{Document, ListBuilder};
//!
//! let mut doc = Document::new();
//! let root = doc.create_html_element("ol", &[]);
//! let mut builder = ListBuilder::new(&doc, root).unwrap();
//!
//! for (level, text) in [(0, "one"), (1, "one.a"), (0, "two")] {
//!     let li = doc.create_html_element("li", &[]);
//!     doc.append_text(li, text);
//!     builder.push(&mut doc, level, li, |doc: &mut Document| {
//!         doc.create_html_element("ol", &[])
//!     });
//! }
//!
//! assert_eq!(
//!     doc.to_html(builder.finish()),
//!     "<ol><li>one</li><ol><li>one.a</li></ol><li>two</li></ol>"
//! );
//! ```

pub mod dom;
pub mod error;
pub mod normalize;
pub mod policy;

pub use dom::{Document, NodeId, NodeKind, Tree};
pub use error::{Error, Result};
pub use normalize::helpers::{
    copy_child_nodes, has_text, next_non_empty_element_sibling, next_sibling_and_remove,
    remove_all_attributes, remove_empty_children, remove_shallow, replace_node, wrap_child_nodes,
};
pub use normalize::{
    ListBuilder, clean_element, clean_element_with, create_nested_list, remove_descendants,
    unwrap_descendants, walk_descendants,
};
pub use policy::CleanPolicy;
