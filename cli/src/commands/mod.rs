//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod completions;
pub mod demo;
pub mod each;
pub mod filter;
pub mod map;
