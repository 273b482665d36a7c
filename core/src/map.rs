//! `map`: transform every element into a new vector.

use crate::each::{each, try_each};
use crate::sequence::Sequence;
use alloc::vec::Vec;

/// Build a new vector whose `i`-th element is `transform(&sequence[i], i)`.
///
/// Polymorphic - the result element type `U` is whatever `transform` returns.
/// The input is only borrowed; the output always has the same length.
///
/// # Examples
/// ```
/// use arrayloop_core::map;
///
/// assert_eq!(map(&[1, 2, 3], |x, _| x * 2), vec![2, 4, 6]);
/// assert_eq!(map(&["a", "bb"], |s, _| s.len()), vec![1, 2]);
/// assert_eq!(map(&[0u8; 0], |x, _| *x), Vec::<u8>::new());
/// ```
pub fn map<S, F, U>(sequence: &S, mut transform: F) -> Vec<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> U,
{
    let mut mapped = Vec::with_capacity(sequence.len());
    each(sequence, |item, index| mapped.push(transform(item, index)));

    tracing::trace!(len = mapped.len(), "map");
    mapped
}

/// Fallible [`map`].
///
/// Returns the first error produced by `transform`; elements already
/// transformed at that point are dropped.
///
/// # Examples
/// ```
/// use arrayloop_core::try_map;
///
/// let halves = try_map(&[2, 4, 6], |x, _| if x % 2 == 0 { Ok(x / 2) } else { Err(*x) });
/// assert_eq!(halves, Ok(vec![1, 2, 3]));
///
/// let odd = try_map(&[2, 3, 6], |x, _| if x % 2 == 0 { Ok(x / 2) } else { Err(*x) });
/// assert_eq!(odd, Err(3));
/// ```
pub fn try_map<S, F, U, E>(sequence: &S, mut transform: F) -> Result<Vec<U>, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> Result<U, E>,
{
    let mut mapped = Vec::with_capacity(sequence.len());
    try_each(sequence, |item, index| {
        mapped.push(transform(item, index)?);
        Ok::<(), E>(())
    })?;

    tracing::trace!(len = mapped.len(), "try_map");
    Ok(mapped)
}
