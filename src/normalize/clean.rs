//! Structural cleaner for pasted word-processor markup.

use tracing::{debug, trace};

use crate::dom::{Tree, is_text_level_semantic, is_void};
use crate::policy::CleanPolicy;

use super::helpers::{has_text, remove_all_attributes, remove_shallow};
use super::walk::{unwrap_descendants, walk_descendants};

/// Clean `element` in place with the default [`CleanPolicy`].
///
/// ```
/// use paste_clean::{Document, clean_element};
///
/// let mut doc = Document::parse_html(r#"<p><span style="color:red">Hello</span> <b></b>World</p>"#);
/// let p = doc.find_by_tag("p").unwrap();
///
/// clean_element(&mut doc, p);
///
/// assert_eq!(doc.to_html(p), "<p>Hello World</p>");
/// ```
pub fn clean_element<T: Tree>(tree: &mut T, element: T::NodeId) {
    clean_element_with(tree, element, &CleanPolicy::default());
}

/// Clean `element` in place.
///
/// Steps, in order:
///
/// 1. Strip every attribute from `element` itself.
/// 2. Unwrap every descendant presentation wrapper.
/// 3. Strip attributes from every descendant whose tag does not keep them.
/// 4. Unwrap direct children that are presentation wrappers, or text-level
///    elements with no text that are not void. After each unwrap the scan
///    resumes at the last kept child (or the first child), since the spliced
///    children may themselves qualify. Only direct children are considered.
pub fn clean_element_with<T: Tree>(tree: &mut T, element: T::NodeId, policy: &CleanPolicy) {
    debug!(
        node = ?element,
        children = tree.child_count(element),
        "cleaning element"
    );

    remove_all_attributes(tree, element);

    unwrap_descendants(tree, element, |tree, node| {
        is_presentation_wrapper(tree, node, policy)
    });

    walk_descendants(
        tree,
        element,
        |tree, node| {
            !tree
                .tag_name(node)
                .is_some_and(|tag| policy.keeps_attributes(tag))
        },
        remove_all_attributes,
    );

    collapse_direct_children(tree, element, policy);

    debug!(
        node = ?element,
        children = tree.child_count(element),
        "cleaned element"
    );
}

fn is_presentation_wrapper<T: Tree>(tree: &T, node: T::NodeId, policy: &CleanPolicy) -> bool {
    tree.tag_name(node)
        .is_some_and(|tag| policy.is_presentation_tag(tag))
}

fn collapse_direct_children<T: Tree>(tree: &mut T, element: T::NodeId, policy: &CleanPolicy) {
    let mut prev: Option<T::NodeId> = None;
    let mut cursor = tree.first_child(element);

    while let Some(child) = cursor {
        let empty_text_level =
            is_text_level_semantic(tree, child) && !is_void(tree, child) && !has_text(tree, child);

        if is_presentation_wrapper(tree, child, policy) || empty_text_level {
            trace!(node = ?child, tag = ?tree.tag_name(child), "unwrapping direct child");
            remove_shallow(tree, child);
            cursor = prev.or_else(|| tree.first_child(element));
        } else {
            prev = Some(child);
            cursor = tree.next_sibling(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, NodeId};
    use proptest::prelude::*;

    fn clean_first(html: &str, tag: &str) -> String {
        let mut doc = Document::parse_html(html);
        let el = doc.find_by_tag(tag).unwrap();
        clean_element(&mut doc, el);
        doc.to_html(el)
    }

    #[test]
    fn test_scenario_span_and_empty_bold() {
        assert_eq!(
            clean_first(r#"<p><span style="color:red">Hello</span> <b></b>World</p>"#, "p"),
            "<p>Hello World</p>"
        );
    }

    #[test]
    fn test_strips_root_attributes() {
        assert_eq!(
            clean_first(r#"<p class="MsoNormal" style="margin:0cm">x</p>"#, "p"),
            "<p>x</p>"
        );
    }

    #[test]
    fn test_unwraps_nested_wrappers() {
        assert_eq!(
            clean_first(
                r#"<p><font face="Arial"><span lang="EN-US">a<span>b</span></span></font></p>"#,
                "p"
            ),
            "<p>ab</p>"
        );
    }

    #[test]
    fn test_keeps_link_and_image_attributes() {
        assert_eq!(
            clean_first(
                r#"<p><a href="http://x.test/" style="color:blue">x</a><img src="a.png" width="10"></p>"#,
                "p"
            ),
            r#"<p><a href="http://x.test/" style="color:blue">x</a><img src="a.png" width="10"></p>"#
        );
    }

    #[test]
    fn test_strips_other_descendant_attributes() {
        assert_eq!(
            clean_first(
                r#"<div><p class="MsoNormal"><b style="mso-bidi-font-weight:normal">x</b></p></div>"#,
                "div"
            ),
            "<div><p><b>x</b></p></div>"
        );
    }

    #[test]
    fn test_empty_wrapper_chain_collapses() {
        // the <i> only becomes a direct child after <b> is unwrapped
        assert_eq!(clean_first("<p>a<b><i></i></b>c</p>", "p"), "<p>ac</p>");
    }

    #[test]
    fn test_rewind_collapses_consecutive_empty_elements() {
        assert_eq!(clean_first("<p><b></b><i></i><u> </u>x</p>", "p"), "<p> x</p>");
    }

    #[test]
    fn test_void_text_level_elements_survive() {
        assert_eq!(clean_first("<p>a<br>b</p>", "p"), "<p>a<br>b</p>");
        assert_eq!(clean_first("<p><b><br></b>b</p>", "p"), "<p><br>b</p>");
    }

    #[test]
    fn test_empty_link_is_unwrapped() {
        assert_eq!(clean_first(r#"<p><a name="_Toc1"></a>Heading</p>"#, "p"), "<p>Heading</p>");
    }

    #[test]
    fn test_nested_empty_inline_is_left_alone() {
        // only direct children collapse
        assert_eq!(clean_first("<p><i>x<b></b></i></p>", "p"), "<p><i>x<b></b></i></p>");
    }

    #[test]
    fn test_block_children_are_kept() {
        assert_eq!(
            clean_first("<div><p></p><h1>t</h1></div>", "div"),
            "<div><p></p><h1>t</h1></div>"
        );
    }

    #[test]
    fn test_custom_policy() {
        let mut doc = Document::parse_html(
            r#"<p><o:p></o:p><span class="x">a</span><td-like>b</td-like></p>"#,
        );
        let p = doc.find_by_tag("p").unwrap();
        let policy = CleanPolicy::empty().with_presentation_tag("o:p");

        clean_element_with(&mut doc, p, &policy);

        // span is no longer a wrapper but is text-level with text, so it stays
        assert_eq!(doc.to_html(p), "<p><span>a</span><td-like>b</td-like></p>");
    }

    #[test]
    fn test_clean_is_idempotent_on_word_markup() {
        let html = r##"<p class="MsoListParagraph" style="text-indent:-18pt"><span style="font-family:Symbol">·<span style="font:7pt">&nbsp;&nbsp;</span></span><b><span lang="EN">Bold</span></b> and <a href="#x"><span>link</span></a><i></i></p>"##;
        let mut doc = Document::parse_html(html);
        let p = doc.find_by_tag("p").unwrap();

        clean_element(&mut doc, p);
        let once = doc.to_html(p);
        clean_element(&mut doc, p);

        assert_eq!(doc.to_html(p), once);
        assert_eq!(once, "<p>·&nbsp;&nbsp;<b>Bold</b> and <a href=\"#x\">link</a></p>");
    }

    #[derive(Debug, Clone)]
    enum Shape {
        Text(&'static str),
        Element(&'static str, Vec<Shape>),
    }

    fn shape() -> impl Strategy<Value = Shape> {
        let leaf =
            prop_oneof![Just(""), Just(" "), Just("x"), Just("\u{a0}")].prop_map(Shape::Text);
        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                prop_oneof![
                    Just("span"),
                    Just("font"),
                    Just("b"),
                    Just("i"),
                    Just("a"),
                    Just("img"),
                    Just("br"),
                    Just("p"),
                    Just("div"),
                ],
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(tag, children)| Shape::Element(tag, children))
        })
    }

    fn build(doc: &mut Document, parent: NodeId, shape: &Shape) {
        match shape {
            Shape::Text(t) => {
                let text = doc.create_text(t.to_string());
                doc.append(parent, text);
            }
            Shape::Element(tag, children) => {
                let attrs: &[(&str, &str)] = match *tag {
                    "a" => &[("href", "#h")],
                    "img" => &[("src", "i.png"), ("alt", "")],
                    _ => &[("class", "Mso"), ("style", "color:red")],
                };
                let el = doc.create_html_element(tag, attrs);
                doc.append(parent, el);
                for child in children {
                    build(doc, el, child);
                }
            }
        }
    }

    fn check_attributes(doc: &Document, node: NodeId) -> Result<(), TestCaseError> {
        for child in doc.children(node) {
            match doc.tag_name(child) {
                Some("a") => prop_assert_eq!(doc.attribute_names(child), vec!["href"]),
                Some("img") => prop_assert_eq!(doc.attribute_names(child), vec!["src", "alt"]),
                _ => prop_assert!(doc.attribute_names(child).is_empty()),
            }
            check_attributes(doc, child)?;
        }
        Ok(())
    }

    fn paragraph(shapes: &[Shape]) -> (Document, NodeId) {
        let mut doc = Document::new();
        let p = doc.create_html_element("p", &[("class", "MsoNormal")]);
        for s in shapes {
            build(&mut doc, p, s);
        }
        (doc, p)
    }

    proptest! {
        #[test]
        fn prop_clean_is_idempotent(shapes in prop::collection::vec(shape(), 0..6)) {
            let (mut doc, p) = paragraph(&shapes);

            clean_element(&mut doc, p);
            let once = doc.to_html(p);
            clean_element(&mut doc, p);

            prop_assert_eq!(doc.to_html(p), once);
        }

        #[test]
        fn prop_attribute_policy_holds(shapes in prop::collection::vec(shape(), 0..6)) {
            let (mut doc, p) = paragraph(&shapes);

            clean_element(&mut doc, p);

            prop_assert!(doc.attribute_names(p).is_empty());
            check_attributes(&doc, p)?;
        }

        #[test]
        fn prop_no_wrappers_survive(shapes in prop::collection::vec(shape(), 0..6)) {
            let (mut doc, p) = paragraph(&shapes);
            let text = doc.text_content(p);

            clean_element(&mut doc, p);

            let html = doc.to_html(p);
            prop_assert!(!html.contains("<span"));
            prop_assert!(!html.contains("<font"));
            prop_assert_eq!(doc.text_content(p), text);
        }
    }
}
