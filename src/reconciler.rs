use std::{borrow::Cow, ops::Range};

use markup_builder::MarkupBuilder;
use tag_pairs::tag_pairs;

use crate::{
    operations::operation::{Action, Operation},
    tokenizer::token::{Token, TokenKind},
    utils::side::Side,
};

pub mod markup_builder;
pub mod tag_pairs;

/// Renders `operations` over the two token sequences into one document.
///
/// Unchanged regions are copied from `after`. Changed leaves (text, void
/// tags and atomic elements) are wrapped in `<del>` or `<ins>` markers
/// carrying the index of their operation. Complete elements inside a changed
/// region stay in place, annotated with `data-diff-node`, and their content
/// is marked instead. Tags whose partner lies outside the region are left as
/// they are. The output is always balanced.
///
/// ```
/// use markup_diff::{align, reconcile, tokenize};
///
/// let before = tokenize("<p>one two</p>");
/// let after = tokenize("<p>one three</p>");
/// let operations = align(&before, &after);
///
/// assert_eq!(
///     reconcile(&before, &after, &operations, None),
///     "<p>one <del data-operation-index=\"1\">two</del>\
///      <ins data-operation-index=\"1\">three</ins></p>"
/// );
/// ```
#[must_use]
pub fn reconcile(
    before: &[Token],
    after: &[Token],
    operations: &[Operation],
    marker_class: Option<&str>,
) -> String {
    let capacity = before.iter().chain(after).map(|t| t.original().len()).sum();
    let mut context = Context {
        builder: MarkupBuilder::with_capacity(capacity),
        before_pairs: tag_pairs(before),
        after_pairs: tag_pairs(after),
        class_attribute: marker_class
            .map(|class| format!(" class=\"{}\"", escape_attribute(class)))
            .unwrap_or_default(),
    };

    for (index, operation) in operations.iter().enumerate() {
        match operation.action {
            Action::Equal => {
                for token in &after[operation.after_range()] {
                    context.push_verbatim(token);
                }
            }
            Action::Delete => context.push_changed(Side::Before, before, operation.before_range(), index),
            Action::Insert => context.push_changed(Side::After, after, operation.after_range(), index),
            Action::Replace => {
                context.push_changed(Side::Before, before, operation.before_range(), index);
                context.push_changed(Side::After, after, operation.after_range(), index);
            }
        }
    }

    context.builder.build()
}

struct Context {
    builder: MarkupBuilder,
    before_pairs: Vec<Option<usize>>,
    after_pairs: Vec<Option<usize>>,
    class_attribute: String,
}

impl Context {
    fn push_verbatim(&mut self, token: &Token) {
        match token.kind() {
            TokenKind::OpenTag(name) => self.builder.open(name, token.original()),
            TokenKind::CloseTag(name) => self.builder.close(name, token.original()),
            _ => self.builder.push(token.original()),
        }
    }

    /// Renders tokens present only on `side`.
    fn push_changed(&mut self, side: Side, tokens: &[Token], range: Range<usize>, index: usize) {
        let mut position = range.start;

        while position < range.end {
            let token = &tokens[position];

            if token.kind().is_leaf() {
                let run_length = tokens[position..range.end]
                    .iter()
                    .take_while(|t| t.kind().is_leaf())
                    .count();
                self.push_marker(side, &tokens[position..position + run_length], index);
                position += run_length;
                continue;
            }

            let partner = match side {
                Side::Before => self.before_pairs[position],
                Side::After => self.after_pairs[position],
            };

            match token.kind() {
                TokenKind::OpenTag(name) if partner.is_some_and(|partner| range.contains(&partner)) => {
                    let annotated = annotate(token.original(), name, side, index);
                    self.builder.open(name, &annotated);
                }
                _ => self.push_verbatim(token),
            }

            position += 1;
        }
    }

    /// Wraps a run of leaves in a marker, unless there is nothing visible
    /// to mark.
    fn push_marker(&mut self, side: Side, run: &[Token], index: usize) {
        if run.iter().all(Token::is_whitespace) {
            return;
        }

        let tag = side.marker_tag();
        self.builder.open(
            tag,
            &format!(
                "<{tag} data-operation-index=\"{index}\"{}>",
                self.class_attribute
            ),
        );
        for token in run {
            self.builder.push(token.original());
        }
        self.builder.close(tag, &format!("</{tag}>"));
    }
}

/// Adds the change annotation right after the tag name of `tag`.
fn annotate(tag: &str, name: &str, side: Side, index: usize) -> String {
    // Tag names are ASCII-lowercased copies of the original, so the name ends
    // at the same byte offset.
    let name_end = (1 + name.len()).min(tag.len());
    let (head, rest) = tag.split_at(name_end);

    format!(
        "{head} data-diff-node=\"{}\" data-operation-index=\"{index}\"{rest}",
        side.marker_tag()
    )
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}
