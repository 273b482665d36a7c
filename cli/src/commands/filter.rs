//! The `filter` command - keep the values matching a predicate.

use arrayloop::filter;

use crate::cli::{FilterArgs, Predicate};
use crate::common::{CliResult, input::read_values};

/// Run the filter command.
pub fn run(args: FilterArgs) -> CliResult<()> {
    let values = read_values(&args.values)?;
    let kept = filter(&values, |&value, _| accepts(args.keep, value));
    tracing::debug!(kept = kept.len(), total = values.len(), "filtered values");
    println!("{kept:?}");
    Ok(())
}

/// Whether `value` satisfies `predicate`.
pub fn accepts(predicate: Predicate, value: i64) -> bool {
    match predicate {
        Predicate::Even => value % 2 == 0,
        Predicate::Odd => value % 2 != 0,
        Predicate::Positive => value > 0,
        Predicate::Negative => value < 0,
    }
}
