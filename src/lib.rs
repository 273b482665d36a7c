//! arrayloop - `each`, `map` and `filter` built from a single index loop
//!
//! # Overview
//!
//! Three stateless primitives over any [`Sequence`]:
//!
//! - [`each`]: visit every element with its index, in ascending order
//! - [`map`]: build a new vector from a per-element transform
//! - [`filter`]: build a new vector from the elements a predicate accepts
//!
//! `map` and `filter` are implemented on top of `each`, and every primitive
//! has a `try_` twin whose callback may fail and stop the walk early.
//!
//! # Quick Start
//!
//! ```
//! use arrayloop::{each, filter, map};
//!
//! let numbers = [1, 2, 3, 4, 5];
//!
//! let mut log = Vec::new();
//! each(&numbers, |value, index| log.push(format!("{index}: {value}")));
//! assert_eq!(log[0], "0: 1");
//!
//! assert_eq!(map(&numbers, |x, _| x * 2), vec![2, 4, 6, 8, 10]);
//! assert_eq!(filter(&numbers, |x, _| x % 2 == 0), vec![2, 4]);
//!
//! // The input is only borrowed.
//! assert_eq!(numbers, [1, 2, 3, 4, 5]);
//! ```
//!
//! # Fallible Callbacks
//!
//! ```
//! use arrayloop::try_map;
//!
//! let doubled = try_map(&[1, i64::MAX, 3], |x, _| x.checked_mul(2).ok_or("overflow"));
//! assert_eq!(doubled, Err("overflow"));
//! ```

pub mod error;
pub use error::{Error, parse_values};

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export the primitives from arrayloop_core
pub use arrayloop_core::{
    Sequence, SequenceExt, each, filter, map, try_each, try_filter, try_map,
};
