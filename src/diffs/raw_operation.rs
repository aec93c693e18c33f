use std::ops::Range;

/// A single step of an edit script between two token sequences, referring to
/// tokens by index.
///
/// `Delete` ranges index the old sequence, `Insert` ranges the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOperation {
    Equal { old: Range<usize>, new: Range<usize> },
    Delete(Range<usize>),
    Insert(Range<usize>),
}

impl RawOperation {
    /// Creates an equal step covering `len` tokens, or `None` when it would
    /// be empty.
    pub fn create_equal(old_start: usize, new_start: usize, len: usize) -> Option<Self> {
        (len > 0).then(|| RawOperation::Equal {
            old: old_start..old_start + len,
            new: new_start..new_start + len,
        })
    }

    pub fn create_delete(old: Range<usize>) -> Option<Self> {
        (!old.is_empty()).then_some(RawOperation::Delete(old))
    }

    pub fn create_insert(new: Range<usize>) -> Option<Self> {
        (!new.is_empty()).then_some(RawOperation::Insert(new))
    }
}
