//! Value input utilities.

use std::io::Read;

use arrayloop::parse_values;

use super::CliResult;

/// Check if the arguments ask for stdin.
pub fn is_stdin(args: &[String]) -> bool {
    matches!(args, [only] if only == "-")
}

/// Read integers from the command-line values, or from stdin if the only
/// value is `-`.
pub fn read_values(args: &[String]) -> CliResult<Vec<i64>> {
    let source = if is_stdin(args) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        args.join(" ")
    };

    let values = parse_values(&source)?;
    tracing::debug!(count = values.len(), "parsed input values");
    Ok(values)
}
