//! Driver: prints one person's summary, then describes an empty
//! capability-typed collection.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::describe::{describe_all, PrettyDescription};
use crate::error::Result;

/// What a driver run wrote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverReport {
    /// Summary printed for the constructed person.
    pub summary: String,
    /// Number of pretty things described from the capability collection.
    #[serde(rename = "prettyThingsDescribed")]
    pub pretty_things_described: usize,
}

/// Run the demonstration against `out`.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<DriverReport> {
    let person = config.person();
    info!("Constructed person: {}", person.name);

    let summary = person.description();
    writeln!(out, "{}", summary)?;

    let pretty_things: Vec<Box<dyn PrettyDescription>> = Vec::new();
    let pretty_things_described = describe_all(&pretty_things, out)?;
    debug!("Pretty things described: {}", pretty_things_described);

    out.flush()?;

    Ok(DriverReport {
        summary,
        pretty_things_described,
    })
}
