use markup_tokenizer::markup_tokenizer;
use token::Token;

use crate::config::{AtomicTags, current_atomic_tags};

pub mod markup_tokenizer;
mod tag;
pub mod token;

/// Splits markup into tokens using the process-wide atomic tag set.
///
/// ```
/// use markup_diff::tokenize;
///
/// let tokens = tokenize("<p>Hello world</p>");
/// assert_eq!(tokens.len(), 5);
/// ```
#[must_use]
pub fn tokenize(markup: &str) -> Vec<Token> { tokenize_with(markup, &current_atomic_tags()) }

/// Splits markup into tokens, treating elements matched by `atomic_tags` as
/// single tokens.
#[must_use]
pub fn tokenize_with(markup: &str, atomic_tags: &AtomicTags) -> Vec<Token> {
    markup_tokenizer(markup, atomic_tags)
}
