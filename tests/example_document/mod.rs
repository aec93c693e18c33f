use pretty_assertions::assert_eq;
use markup_diff::{AtomicTags, DiffOptions};
use serde::Deserialize;

/// `ExampleDocument` represents a test case for the diffing process.
/// It contains the before and after markup, the options to compare them with
/// and the expected merged document.
///
/// Without `atomic_tags` the default atomic tag set is used, never the
/// process-wide one, so documents can be checked in parallel.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExampleDocument {
    name: String,
    before: String,
    after: String,
    expected: String,

    #[serde(default)]
    atomic_tags: Option<String>,

    #[serde(default)]
    class_name: Option<String>,

    #[serde(default)]
    absorb_whitespace: bool,
}

impl ExampleDocument {
    #[must_use]
    pub fn before(&self) -> &str { &self.before }

    #[must_use]
    pub fn after(&self) -> &str { &self.after }

    /// The options described by the document.
    ///
    /// # Panics
    ///
    /// If the document's atomic tag pattern is invalid.
    #[must_use]
    pub fn options(&self) -> DiffOptions {
        let atomic_tags = self.atomic_tags.as_deref().map_or_else(AtomicTags::default, |pattern| {
            AtomicTags::new(pattern).expect("Example documents must use valid patterns")
        });

        let mut options = DiffOptions::new()
            .with_atomic_tags(atomic_tags)
            .with_absorbed_whitespace(self.absorb_whitespace);
        options.marker_class.clone_from(&self.class_name);

        options
    }

    /// Asserts that the result matches the expected document.
    ///
    /// # Panics
    ///
    /// If the result does not match the expected document.
    pub fn assert_eq(&self, result: &str) {
        assert_eq!(result, self.expected, "{}", self.name);
    }
}
