use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happened to a region of the documents.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// A region of the before document paired with a region of the after
/// document. End indices are inclusive.
///
/// An insertion has no `end_in_before`; its `start_in_before` is the before
/// position where the new tokens appear. Deletions mirror this on the after
/// side.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,

    pub start_in_before: usize,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub end_in_before: Option<usize>,

    pub start_in_after: usize,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub end_in_after: Option<usize>,
}

impl Operation {
    /// Both ranges must be non-empty and of the same length.
    #[must_use]
    pub fn equal(before: Range<usize>, after: Range<usize>) -> Self {
        debug_assert_eq!(before.len(), after.len(), "Equal ranges must match");

        Operation {
            action: Action::Equal,
            start_in_before: before.start,
            end_in_before: last_index(&before),
            start_in_after: after.start,
            end_in_after: last_index(&after),
        }
    }

    /// Creates the operation describing a changed region, or `None` if both
    /// ranges are empty.
    #[must_use]
    pub fn create_change(before: Range<usize>, after: Range<usize>) -> Option<Self> {
        let action = match (before.is_empty(), after.is_empty()) {
            (true, true) => return None,
            (true, false) => Action::Insert,
            (false, true) => Action::Delete,
            (false, false) => Action::Replace,
        };

        Some(Operation {
            action,
            start_in_before: before.start,
            end_in_before: last_index(&before),
            start_in_after: after.start,
            end_in_after: last_index(&after),
        })
    }

    /// The before tokens covered, empty for insertions.
    #[must_use]
    pub fn before_range(&self) -> Range<usize> {
        self.start_in_before..self.end_in_before.map_or(self.start_in_before, |end| end + 1)
    }

    /// The after tokens covered, empty for deletions.
    #[must_use]
    pub fn after_range(&self) -> Range<usize> {
        self.start_in_after..self.end_in_after.map_or(self.start_in_after, |end| end + 1)
    }

    /// Grows this operation to also cover `other`, which must directly
    /// follow it.
    pub fn extend_with(&mut self, other: &Operation) {
        debug_assert_eq!(self.before_range().end, other.start_in_before);
        debug_assert_eq!(self.after_range().end, other.start_in_after);

        let before = self.start_in_before..other.before_range().end;
        let after = self.start_in_after..other.after_range().end;
        self.end_in_before = last_index(&before);
        self.end_in_after = last_index(&after);
    }
}

fn last_index(range: &Range<usize>) -> Option<usize> { (!range.is_empty()).then(|| range.end - 1) }
