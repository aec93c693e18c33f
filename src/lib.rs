//! Structural diffing of HTML-like markup.
//!
//! Two versions of a document are split into tokens, aligned with Myers'
//! algorithm and rendered as one merged document in which removed content is
//! wrapped in `<del>` and added content in `<ins>`. Every marker carries the
//! index of the operation it was rendered from, and the output stays
//! well-nested.
//!
//! ```
//! assert_eq!(
//!     markup_diff::diff("input", "input 2", None),
//!     "input<ins data-operation-index=\"1\"> 2</ins>"
//! );
//! ```

mod config;
mod diffs;
mod errors;
mod operations;
mod reconciler;
mod tokenizer;
mod utils;

pub use config::{
    AtomicTags, DEFAULT_ATOMIC_TAGS, DiffOptions, configure_atomic_tags, current_atomic_tags,
    reset_atomic_tags,
};
pub use errors::ConfigError;
pub use operations::{
    align::{absorb_isolated_whitespace, align},
    operation::{Action, Operation},
};
pub use reconciler::reconcile;
pub use tokenizer::{
    token::{Token, TokenKind},
    tokenize, tokenize_with,
};
pub use utils::side::Side;

/// Compares two documents and renders the merged result, using the
/// process-wide atomic tag set.
///
/// Every marker gets `class="marker_class"` when a class is given.
#[must_use]
pub fn diff(before: &str, after: &str, marker_class: Option<&str>) -> String {
    let mut options = DiffOptions::new();
    options.marker_class = marker_class.map(ToOwned::to_owned);

    diff_with_options(before, after, &options)
}

/// Compares two documents and renders the merged result.
///
/// ```
/// use markup_diff::{AtomicTags, DiffOptions, diff_with_options};
///
/// let options = DiffOptions::new()
///     .with_atomic_tags(AtomicTags::new("li").unwrap())
///     .with_marker_class("change");
///
/// assert_eq!(
///     diff_with_options("<ul><li>one</li></ul>", "<ul><li>two</li></ul>", &options),
///     "<ul><del data-operation-index=\"1\" class=\"change\"><li>one</li></del>\
///      <ins data-operation-index=\"1\" class=\"change\"><li>two</li></ins></ul>"
/// );
/// ```
#[must_use]
pub fn diff_with_options(before: &str, after: &str, options: &DiffOptions) -> String {
    let atomic_tags = options
        .atomic_tags
        .clone()
        .unwrap_or_else(current_atomic_tags);

    let before_tokens = tokenize_with(before, &atomic_tags);
    let after_tokens = tokenize_with(after, &atomic_tags);
    log::debug!(
        "Tokenized documents into {} and {} tokens",
        before_tokens.len(),
        after_tokens.len()
    );

    let mut operations = align(&before_tokens, &after_tokens);
    if options.absorb_whitespace {
        operations = absorb_isolated_whitespace(operations, &before_tokens);
    }

    reconcile(
        &before_tokens,
        &after_tokens,
        &operations,
        options.marker_class.as_deref(),
    )
}

#[cfg(feature = "wasm")]
pub mod wasm;
