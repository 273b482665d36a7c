//! `each`: the base iteration primitive.
//!
//! Both forms walk the sequence with a plain index loop and hand every
//! element, together with its position, to the caller's callback. `map` and
//! `filter` are layered on top of these two functions.

use crate::sequence::Sequence;

/// Visit every element of `sequence` in ascending index order.
///
/// `visit` is called exactly `sequence.len()` times with `(element, index)`.
/// Whatever it returns is discarded, so closures that evaluate to a value
/// (for example a `println!` wrapped in a block expression) are accepted.
///
/// # Examples
/// ```
/// use arrayloop_core::each;
///
/// let mut seen = Vec::new();
/// each(&[1, 2, 3, 4], |value, index| seen.push((index, *value)));
/// assert_eq!(seen, [(0, 1), (1, 2), (2, 3), (3, 4)]);
/// ```
pub fn each<S, F, R>(sequence: &S, mut visit: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> R,
{
    let len = sequence.len();
    tracing::trace!(len, "each");

    for index in 0..len {
        let Some(item) = sequence.get(index) else {
            break;
        };
        visit(item, index);
    }
}

/// Fallible [`each`]: stops at the first `Err` returned by `visit`.
///
/// No element after the failing one is visited, and the error is returned
/// as-is.
///
/// # Examples
/// ```
/// use arrayloop_core::try_each;
///
/// let mut visited = 0;
/// let result = try_each(&[1, 2, -3, 4], |value, _| {
///     visited += 1;
///     if *value < 0 { Err("negative") } else { Ok(()) }
/// });
/// assert_eq!(result, Err("negative"));
/// assert_eq!(visited, 3);
/// ```
pub fn try_each<S, F, E>(sequence: &S, mut visit: F) -> Result<(), E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> Result<(), E>,
{
    let len = sequence.len();
    tracing::trace!(len, "try_each");

    for index in 0..len {
        let Some(item) = sequence.get(index) else {
            break;
        };
        if let Err(err) = visit(item, index) {
            tracing::debug!(index, len, "try_each stopped by callback error");
            return Err(err);
        }
    }
    Ok(())
}
