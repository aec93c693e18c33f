use super::operation::{Action, Operation};
use crate::{
    diffs::{myers, raw_operation::RawOperation},
    tokenizer::token::Token,
};

/// Computes the operations turning `before` into `after`.
///
/// Matched tokens coalesce into `equal` operations and every maximal
/// unmatched region between them becomes a single `delete`, `insert` or
/// `replace`. The result partitions both sequences in order.
///
/// ```
/// use markup_diff::{Action, align, tokenize};
///
/// let operations = align(&tokenize("input"), &tokenize("input 2"));
///
/// assert_eq!(operations.len(), 2);
/// assert_eq!(operations[0].action, Action::Equal);
/// assert_eq!(operations[1].action, Action::Insert);
/// assert_eq!(operations[1].start_in_before, 1);
/// assert_eq!(operations[1].after_range(), 1..3);
/// ```
#[must_use]
pub fn align(before: &[Token], after: &[Token]) -> Vec<Operation> {
    let mut operations: Vec<Operation> = Vec::new();
    let mut deleted = 0..0;
    let mut inserted = 0..0;

    for raw_operation in myers::diff(before, after) {
        match raw_operation {
            RawOperation::Delete(range) => deleted.end = range.end,
            RawOperation::Insert(range) => inserted.end = range.end,
            RawOperation::Equal { old, new } => {
                operations.extend(Operation::create_change(deleted, inserted));

                let equal = Operation::equal(old.clone(), new.clone());
                match operations.last_mut() {
                    Some(last) if last.action == Action::Equal => last.extend_with(&equal),
                    _ => operations.push(equal),
                }

                deleted = old.end..old.end;
                inserted = new.end..new.end;
            }
        }
    }
    operations.extend(Operation::create_change(deleted, inserted));

    log::debug!(
        "Aligned {} and {} tokens into {} operations",
        before.len(),
        after.len(),
        operations.len()
    );

    operations
}

/// Folds a single whitespace token directly following a replacement into
/// that replacement, together with any change that comes right after it.
///
/// This turns "a b" → "c d" into one replacement instead of two replacements
/// around an unchanged space. Changed regions stay maximal, so a replacement
/// is never directly followed by another change.
#[must_use]
pub fn absorb_isolated_whitespace(operations: Vec<Operation>, before: &[Token]) -> Vec<Operation> {
    let mut result: Vec<Operation> = Vec::with_capacity(operations.len());

    for operation in operations {
        let is_single_whitespace = operation.action == Action::Equal
            && operation.before_range().len() == 1
            && before
                .get(operation.start_in_before)
                .is_some_and(Token::is_whitespace);

        match result.last_mut() {
            Some(last)
                if last.action == Action::Replace
                    && (is_single_whitespace || operation.action != Action::Equal) =>
            {
                last.extend_with(&operation);
            }
            _ => result.push(operation),
        }
    }

    result
}
