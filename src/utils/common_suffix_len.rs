use std::ops::Range;

/// Length of the run of equal items at the end of both ranges.
/// Adapted from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_suffix_len<T>(old: &[T], old_range: Range<usize>, new: &[T], new_range: Range<usize>) -> usize
where
    T: PartialEq,
{
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(old, new)| old == new)
        .count()
}
