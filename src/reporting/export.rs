//! Event log export
//!
//! Writes the ordered event log to disk as a pretty-printed JSON array or a
//! CSV file with a header row. Field order in both formats is stable.

use crate::simulation::{SimulationError, SimulationEvent, SimulationResult};
use crate::types::OutputFormat;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// CSV header row, matching the per-event field order
const CSV_HEADER: &str = "day,date,time,event_type,description,amount,guest_id,room_number,reservation_id";

/// Write the event log to `path` in the requested format
pub fn export_events(
    path: impl AsRef<Path>,
    events: &[SimulationEvent],
    format: OutputFormat,
) -> SimulationResult<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Json => write_json(path, events),
        OutputFormat::Csv => write_csv(path, events),
    }?;
    info!(path = %path.display(), %format, count = events.len(), "event log exported");
    Ok(())
}

fn write_json(path: &Path, events: &[SimulationEvent]) -> SimulationResult<()> {
    let json = serde_json::to_string_pretty(events)?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv(path: &Path, events: &[SimulationEvent]) -> SimulationResult<()> {
    let mut out = String::with_capacity(events.len() * 96 + CSV_HEADER.len());
    out.push_str(CSV_HEADER);
    out.push('\n');
    for event in events {
        writeln!(
            out,
            "{},{},{},{},{},{:.2},{},{},{}",
            event.day,
            event.date,
            event.time,
            event.event_type,
            csv_quote(&event.description),
            event.amount,
            event.guest_id.map(|id| id.0.to_string()).unwrap_or_default(),
            csv_quote(event.room_number.as_deref().unwrap_or_default()),
            event.reservation_id.map(|id| id.0.to_string()).unwrap_or_default(),
        )
        .map_err(|e| SimulationError::Export(e.to_string()))?;
    }
    fs::write(path, out)?;
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote, or newline
fn csv_quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
