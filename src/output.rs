//! Output formatting and export for station rankings.
//!
//! Supports a logged table, pretty JSON, and CSV files, plus the view listing.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::{debug, info};

use crate::pages::View;
use crate::stats::StationCount;

/// Logs the ranking one station per line.
pub fn print_table(top: &[StationCount]) {
    if top.is_empty() {
        info!("No stations to rank");
        return;
    }
    for (i, c) in top.iter().enumerate() {
        info!(rank = i + 1, station = %c.station_name, trips = c.trip_count, "Station");
    }
}

/// Writes the ranking as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, top: &[StationCount]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, top)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes one `slug<TAB>label` line per view.
pub fn write_views<W: Write>(mut writer: W, views: &[View]) -> Result<()> {
    for view in views {
        writeln!(writer, "{}\t{}", view.slug(), view.label())?;
    }
    Ok(())
}

/// Writes the ranking to a CSV file at `path`, replacing any existing file.
pub fn write_csv(path: &Path, top: &[StationCount]) -> Result<()> {
    debug!(path = %path.display(), rows = top.len(), "Writing CSV");

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    if top.is_empty() {
        writer.write_record(["station_name", "trip_count"])?;
    }
    for c in top {
        writer.serialize(c)?;
    }
    writer.flush()?;

    Ok(())
}
