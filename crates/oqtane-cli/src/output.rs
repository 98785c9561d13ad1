//! Terminal output formatting for the oqtane CLI.
//!
//! Provides consistent, colored output using the [`console`] crate. Styling
//! is dropped automatically when the stream is not a terminal. Everything but
//! the error line writes to a caller-supplied writer so command output can be
//! captured.

use std::io::{self, Write};

use console::style;

/// Write a bold header line.
pub fn write_header(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", style(text).bold())
}

/// Write an aligned `Label:    value` line.
pub fn write_field(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{} {}", style(format!("{:<10}", format!("{label}:"))).dim(), value)
}

/// Write an indented list item.
pub fn write_item(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "  {text}")
}

/// Write a dimmed informational note.
pub fn write_note(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", style(text).dim())
}

/// The single `error: …` line shown for a failed command.
pub fn format_error(text: &str) -> String {
    format!("{} {}", style("error:").for_stderr().red().bold(), text)
}

/// Print [`format_error`] to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", format_error(text));
}
