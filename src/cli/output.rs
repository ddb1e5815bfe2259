//! Shared CLI output helpers.
//!
//! Errors and hints are styled to stderr (respecting NO_COLOR via `console`);
//! results print as pretty JSON on stdout for scripting.

use console::style;
use serde::Serialize;

use crate::error::Result;

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message to stderr.
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Pretty-print a value as JSON with sorted keys.
///
/// Serialization goes through `serde_json::Value`, whose object map is a
/// BTreeMap, so keys come out in sorted order.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let value = serde_json::to_value(value)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
