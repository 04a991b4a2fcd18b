//! The PrettyDescription capability and helpers over capability-typed collections.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Anything that can produce a human-readable textual summary of itself.
pub trait PrettyDescription {
    fn description(&self) -> String;
}

/// Write each item's description on its own line, in order.
///
/// Returns the number of items written. An empty slice writes nothing.
pub fn describe_all<W: Write>(
    items: &[Box<dyn PrettyDescription>],
    out: &mut W,
) -> Result<usize> {
    for item in items {
        writeln!(out, "{}", item.description())?;
    }
    debug!("Described {} pretty things", items.len());
    Ok(items.len())
}
