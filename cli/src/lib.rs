//! arrayloop CLI library.
//!
//! This crate provides the command-line front end for the arrayloop
//! primitives. The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
