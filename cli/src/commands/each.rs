//! The `each` command - print every value with its index.

use arrayloop::each;

use crate::cli::EachArgs;
use crate::common::{CliResult, input::read_values};

/// Run the each command.
pub fn run(args: EachArgs) -> CliResult<()> {
    let values = read_values(&args.values)?;
    each(&values, |value, index| println!("index: {index} value: {value}"));
    Ok(())
}
