//! User-facing errors.
//!
//! The iteration primitives themselves cannot fail; these errors come from
//! turning untrusted input into a sequence and from callbacks that refuse a
//! value (checked arithmetic overflow).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[diagnostic(
        code(arrayloop::invalid_value),
        help("values must be whole numbers that fit in a signed 64-bit integer")
    )]
    #[error("invalid value `{token}`: {reason}")]
    InvalidValue {
        #[source_code]
        src: String,

        #[label("not an integer")]
        span: SourceSpan,

        token: String,
        reason: String,
    },

    #[diagnostic(
        code(arrayloop::empty_input),
        help("pass values as arguments, or `-` to read them from stdin")
    )]
    #[error("no values given")]
    EmptyInput,

    #[diagnostic(code(arrayloop::overflow))]
    #[error("`{op}` overflowed at index {index} (value {value})")]
    Overflow {
        op: &'static str,
        value: i64,
        index: usize,
    },

    #[diagnostic(code(arrayloop::io))]
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// An unparseable token found at byte `offset` of `src`.
    pub fn invalid_value(
        src: impl Into<String>,
        offset: usize,
        token: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Error::InvalidValue {
            src: src.into(),
            span: (offset, token.len()).into(),
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Parse whitespace-separated signed integers.
///
/// Errors carry the full input as source code, so the rendered diagnostic
/// underlines the offending token in place.
///
/// ```
/// use arrayloop::parse_values;
///
/// assert_eq!(parse_values("1 2  -3").unwrap(), vec![1, 2, -3]);
/// assert!(parse_values("1 two 3").is_err());
/// assert!(parse_values("   ").is_err());
/// ```
pub fn parse_values(src: &str) -> Result<Vec<i64>, Error> {
    let mut values = Vec::new();
    let mut rest = src;
    let mut offset = 0;

    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        let after = &rest[start..];
        let len = after.find(char::is_whitespace).unwrap_or(after.len());
        let token = &after[..len];

        let value = token
            .parse::<i64>()
            .map_err(|e| Error::invalid_value(src, offset + start, token, e))?;
        values.push(value);

        offset += start + len;
        rest = &after[len..];
    }

    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(values)
}
