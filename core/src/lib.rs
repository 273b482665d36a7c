#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Loop-built `each`, `map` and `filter` over any indexable sequence.
//!
//! Every primitive here is driven by a plain index loop in [`each`]; [`map`]
//! and [`filter`] only supply a callback that accumulates into a fresh
//! vector. Inputs are borrowed and never mutated.

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod each;
pub mod ext;
pub mod filter;
pub mod map;
pub mod sequence;

pub use each::{each, try_each};
pub use ext::SequenceExt;
pub use filter::{filter, try_filter};
pub use map::{map, try_map};
pub use sequence::Sequence;
