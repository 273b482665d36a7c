//! Integration tests for the public API.
//!
//! These exercise the crate the way a downstream user would: through the
//! root re-exports, over their own `Sequence` implementation and over the
//! standard containers.

use std::collections::VecDeque;

use arrayloop_core::{Sequence, SequenceExt, each, filter, map, try_each, try_filter, try_map};

/// A sequence backed by a function of the index, e.g. `0, 1, 4, 9, ...`.
struct Squares {
    values: Vec<u64>,
}

impl Squares {
    fn new(n: u64) -> Self {
        Self {
            values: (0..n).map(|i| i * i).collect(),
        }
    }
}

impl Sequence for Squares {
    type Item = u64;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Option<&u64> {
        self.values.get(index)
    }
}

#[test]
fn test_custom_sequence() {
    let squares = Squares::new(6);

    let mut visited = Vec::new();
    each(&squares, |v, i| visited.push((i, *v)));
    assert_eq!(visited, vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16), (5, 25)]);

    assert_eq!(map(&squares, |v, _| v + 1), vec![1, 2, 5, 10, 17, 26]);
    assert_eq!(filter(&squares, |v, _| v % 2 == 1), vec![1, 9, 25]);
}

#[test]
fn test_same_results_across_containers() {
    let v = vec![1, 2, 3, 4, 5];
    let arr = [1, 2, 3, 4, 5];
    let dq: VecDeque<i32> = v.iter().copied().collect();
    let slice: &[i32] = &v;

    let expected_map = vec![2, 4, 6, 8, 10];
    assert_eq!(map(&v, |x, _| x * 2), expected_map);
    assert_eq!(map(&arr, |x, _| x * 2), expected_map);
    assert_eq!(map(&dq, |x, _| x * 2), expected_map);
    assert_eq!(map(slice, |x, _| x * 2), expected_map);

    let expected_filter = vec![2, 4];
    assert_eq!(filter(&v, |x, _| x % 2 == 0), expected_filter);
    assert_eq!(filter(&arr, |x, _| x % 2 == 0), expected_filter);
    assert_eq!(filter(&dq, |x, _| x % 2 == 0), expected_filter);
    assert_eq!(filter(slice, |x, _| x % 2 == 0), expected_filter);
}

#[test]
fn test_try_variants_with_custom_error() {
    #[derive(Debug, PartialEq)]
    struct TooBig(usize);

    let squares = Squares::new(10);
    let check = |v: &u64, i: usize| if *v > 20 { Err(TooBig(i)) } else { Ok(*v) };

    assert_eq!(try_map(&squares, check), Err(TooBig(5)));
    assert_eq!(
        try_filter(&squares, |v, i| check(v, i).map(|v| v > 3)),
        Err(TooBig(5))
    );
    assert_eq!(try_each(&squares, |v, i| check(v, i).map(|_| ())), Err(TooBig(5)));

    let small = Squares::new(4);
    assert_eq!(try_map(&small, check), Ok(vec![0, 1, 4, 9]));
}

#[test]
fn test_extension_methods() {
    let words = vec!["each", "map", "filter"];
    let lengths = words.map_each(|w, _| w.len());
    assert_eq!(lengths, vec![4, 3, 6]);

    let long = words.filter_each(|w, _| w.len() > 3);
    assert_eq!(long, vec!["each", "filter"]);

    let mut joined = String::new();
    words.each(|w, i| {
        if i > 0 {
            joined.push(',');
        }
        joined.push_str(w);
    });
    assert_eq!(joined, "each,map,filter");
}
