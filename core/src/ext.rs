//! Method-call sugar over the free functions.

use crate::sequence::Sequence;
use alloc::vec::Vec;

/// Extension methods available on every [`Sequence`].
///
/// Names carry an `_each` suffix where they would otherwise shadow
/// `Iterator::map` / `Iterator::filter` on types that are both.
///
/// ```
/// use arrayloop_core::SequenceExt;
///
/// let v = vec![1, 2, 3, 4, 5];
/// let evens = v.filter_each(|x, _| x % 2 == 0);
/// assert_eq!(evens.map_each(|x, i| x * 10 + i as i32), vec![20, 41]);
/// ```
pub trait SequenceExt: Sequence {
    fn each<F, R>(&self, visit: F)
    where
        F: FnMut(&Self::Item, usize) -> R,
    {
        crate::each::each(self, visit)
    }

    fn try_each<F, E>(&self, visit: F) -> Result<(), E>
    where
        F: FnMut(&Self::Item, usize) -> Result<(), E>,
    {
        crate::each::try_each(self, visit)
    }

    fn map_each<F, U>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&Self::Item, usize) -> U,
    {
        crate::map::map(self, transform)
    }

    fn try_map_each<F, U, E>(&self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&Self::Item, usize) -> Result<U, E>,
    {
        crate::map::try_map(self, transform)
    }

    fn filter_each<P>(&self, predicate: P) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item, usize) -> bool,
    {
        crate::filter::filter(self, predicate)
    }

    fn try_filter_each<P, E>(&self, predicate: P) -> Result<Vec<Self::Item>, E>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item, usize) -> Result<bool, E>,
    {
        crate::filter::try_filter(self, predicate)
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
