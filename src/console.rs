//! Informational log lines, not part of the functional contract.

use colored::{ColoredString, Colorize};

const PREFIX: &str = "[packout]";

/// Print one `[packout]`-prefixed line to stdout.
pub(crate) fn log(message: impl AsRef<str>) {
    println!("{} {}", PREFIX.dimmed(), message.as_ref());
}

/// Dim label for the fixed part of a log line ("copied:", "removed:").
pub(crate) fn label(raw: &str) -> ColoredString {
    raw.dimmed()
}

/// Magenta highlight for a path fragment.
pub(crate) fn path(raw: &str) -> ColoredString {
    raw.magenta()
}

/// Green highlight for a produced file.
pub(crate) fn produced(raw: &str) -> ColoredString {
    raw.green()
}
