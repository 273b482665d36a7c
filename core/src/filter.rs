//! `filter`: keep the elements a predicate accepts.

use crate::each::{each, try_each};
use crate::sequence::Sequence;
use alloc::vec::Vec;

/// Collect clones of the elements for which `predicate(element, index)` is
/// true, in their original relative order.
///
/// # Edge Cases
///
/// - Empty input: returns an empty vector without calling `predicate`
/// - No element accepted: returns an empty vector
///
/// # Examples
/// ```
/// use arrayloop_core::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |x, _| x % 2 == 0), vec![2, 4]);
/// assert_eq!(filter(&["a", "b", "c"], |_, i| i != 1), vec!["a", "c"]);
/// assert!(filter(&[1, 2, 3], |_, _| false).is_empty());
/// ```
pub fn filter<S, P>(sequence: &S, mut predicate: P) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item, usize) -> bool,
{
    let mut kept = Vec::new();
    each(sequence, |item, index| {
        if predicate(item, index) {
            kept.push(item.clone());
        }
    });

    tracing::trace!(len = sequence.len(), kept = kept.len(), "filter");
    kept
}

/// Fallible [`filter`]: the predicate may reject the whole call with `Err`.
///
/// The first error stops iteration and is returned unchanged.
pub fn try_filter<S, P, E>(sequence: &S, mut predicate: P) -> Result<Vec<S::Item>, E>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item, usize) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    try_each(sequence, |item, index| {
        if predicate(item, index)? {
            kept.push(item.clone());
        }
        Ok::<(), E>(())
    })?;

    tracing::trace!(len = sequence.len(), kept = kept.len(), "try_filter");
    Ok(kept)
}
