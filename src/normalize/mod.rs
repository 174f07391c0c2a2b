//! Normalization passes over a [`Tree`](crate::dom::Tree).
//!
//! ## Flow
//!
//! A caller feeds each pasted paragraph through [`clean_element`], which is
//! built on the mutation-safe [`walk_descendants`] primitive:
//!
//! 1. **Strip** the element's own attributes
//! 2. **Unwrap** presentation wrappers (`<span>`, `<font>`) at any depth
//! 3. **Strip** attributes everywhere except on `<img>` and `<a>`
//! 4. **Collapse** wrapper and empty inline direct children
//!
//! List items are handled separately: their declared level goes through
//! [`create_nested_list`] (or a [`ListBuilder`]) to find the container they
//! belong in.

mod clean;
pub mod helpers;
mod lists;
mod walk;

pub use clean::{clean_element, clean_element_with};
pub use lists::{ListBuilder, create_nested_list};
pub use walk::{remove_descendants, unwrap_descendants, walk_descendants};
