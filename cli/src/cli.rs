//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// arrayloop - each, map and filter over integer lists
#[derive(Parser, Debug)]
#[command(name = "arrayloop", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in demonstration of each, map and filter
    Demo,

    /// Visit each value, printing its index and value
    Each(EachArgs),

    /// Transform each value
    Map(MapArgs),

    /// Keep the values matching a predicate
    Filter(FilterArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `each` command.
#[derive(Args, Debug)]
pub struct EachArgs {
    /// Integers to visit (use `-` to read from stdin)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for the `map` command.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Operation applied to every value
    #[arg(long, short)]
    pub op: MapOp,

    /// Integers to transform (use `-` to read from stdin)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for the `filter` command.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Predicate a value must satisfy to be kept
    #[arg(long, short)]
    pub keep: Predicate,

    /// Integers to filter (use `-` to read from stdin)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// Transform applied by `map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapOp {
    /// x * 2
    Double,
    /// x * x
    Square,
    /// -x
    Negate,
    /// x + 1
    Increment,
}

/// Predicate applied by `filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Predicate {
    Even,
    Odd,
    Positive,
    Negative,
}
