use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod linalg;

/// Installs the global `tracing` subscriber used by the `lilith` binary.
///
/// Events go to stderr with source locations and a UTC wall-clock timestamp. Fails if a global
/// subscriber has already been set.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(())
}
