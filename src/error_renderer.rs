//! Error rendering using miette's graphical report handler.
//!
//! This module turns an [`Error`] into a human-readable report with the
//! offending input underlined, for display on a terminal.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
    /// Maximum line width before wrapping.
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
            width: 80,
        }
    }
}

impl RenderConfig {
    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme::none(),
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use arrayloop::{RenderConfig, parse_values, render_error_to};
///
/// let err = parse_values("1 2 three").unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
///
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("invalid value `three`"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme())
        .with_width(config.width)
        .with_links(false);

    let mut out = String::new();
    handler
        .render_report(&mut out, error)
        .map_err(std::io::Error::other)?;
    writer.write_all(out.as_bytes())
}
