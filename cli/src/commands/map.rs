//! The `map` command - transform every value.

use arrayloop::{Error, try_map};

use crate::cli::{MapArgs, MapOp};
use crate::common::{CliResult, input::read_values};

/// Run the map command.
pub fn run(args: MapArgs) -> CliResult<()> {
    let values = read_values(&args.values)?;
    let mapped = map_values(args.op, &values)?;
    println!("{mapped:?}");
    Ok(())
}

/// Apply `op` to every value, failing on the first overflow.
pub fn map_values(op: MapOp, values: &[i64]) -> Result<Vec<i64>, Error> {
    try_map(values, |&value, index| {
        apply(op, value).ok_or_else(|| {
            tracing::debug!(index, value, "map operation overflowed");
            Error::Overflow {
                op: op_name(op),
                value,
                index,
            }
        })
    })
}

fn apply(op: MapOp, value: i64) -> Option<i64> {
    match op {
        MapOp::Double => value.checked_mul(2),
        MapOp::Square => value.checked_mul(value),
        MapOp::Negate => value.checked_neg(),
        MapOp::Increment => value.checked_add(1),
    }
}

fn op_name(op: MapOp) -> &'static str {
    match op {
        MapOp::Double => "double",
        MapOp::Square => "square",
        MapOp::Negate => "negate",
        MapOp::Increment => "increment",
    }
}
