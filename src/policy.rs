//! Cleanup policy.
//!
//! Which tags count as presentation noise and which keep their attributes is
//! configuration, not algorithm. The defaults cover word-processor output:
//! `<span>` and `<font>` wrappers carry nothing but inline styling, while
//! `<img>` and `<a>` attributes (`src`, `href`) are load-bearing.

/// Tags unwrapped by default.
pub const DEFAULT_PRESENTATION_TAGS: &[&str] = &["span", "font"];

/// Tags that keep their attributes by default.
pub const DEFAULT_ATTRIBUTE_TAGS: &[&str] = &["img", "a"];

/// Configures the structural cleaner.
///
/// ```
/// use paste_clean::CleanPolicy;
///
/// let policy = CleanPolicy::new()
///     .with_presentation_tag("o:p")
///     .with_attribute_tag("td");
///
/// assert!(policy.is_presentation_tag("FONT"));
/// assert!(policy.keeps_attributes("td"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CleanPolicy {
    /// Tags whose elements are replaced by their children.
    pub presentation_tags: Vec<String>,
    /// Tags whose elements keep all attributes.
    pub attribute_tags: Vec<String>,
}

impl CleanPolicy {
    /// Word-processor defaults.
    pub fn new() -> Self {
        Self {
            presentation_tags: DEFAULT_PRESENTATION_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            attribute_tags: DEFAULT_ATTRIBUTE_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    /// A policy that unwraps nothing and strips every attribute.
    pub fn empty() -> Self {
        Self {
            presentation_tags: Vec::new(),
            attribute_tags: Vec::new(),
        }
    }

    pub fn with_presentation_tag(mut self, tag: impl Into<String>) -> Self {
        self.presentation_tags.push(tag.into());
        self
    }

    pub fn with_attribute_tag(mut self, tag: impl Into<String>) -> Self {
        self.attribute_tags.push(tag.into());
        self
    }

    /// Check if `tag` names a presentation wrapper (ASCII case-insensitive).
    pub fn is_presentation_tag(&self, tag: &str) -> bool {
        self.presentation_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Check if elements named `tag` keep their attributes.
    pub fn keeps_attributes(&self, tag: &str) -> bool {
        self.attribute_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Default for CleanPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = CleanPolicy::default();

        assert!(policy.is_presentation_tag("span"));
        assert!(policy.is_presentation_tag("FONT"));
        assert!(!policy.is_presentation_tag("b"));
        assert!(policy.keeps_attributes("IMG"));
        assert!(policy.keeps_attributes("a"));
        assert!(!policy.keeps_attributes("p"));
    }

    #[test]
    fn test_empty_policy() {
        let policy = CleanPolicy::empty();

        assert!(!policy.is_presentation_tag("span"));
        assert!(!policy.keeps_attributes("a"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_policy() {
        let policy: CleanPolicy =
            serde_json::from_str(r#"{"presentation_tags": ["span", "font", "o:p"]}"#).unwrap();

        assert!(policy.is_presentation_tag("o:p"));
        assert_eq!(policy.attribute_tags, vec!["img", "a"]);
    }
}
