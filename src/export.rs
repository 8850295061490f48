//! Spreadsheet export.
//!
//! Renders a schedule as CSV: one row per atomic slot with a date column
//! and a time-range column, then one column per location in the caller's
//! order. Cell text is the comma-joined display names of the workers on
//! duty, manager entries annotated `(manager)`, `-` for an unstaffed
//! cell — the same layout the schedule tables use on screen.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::models::{Location, Role, Schedule, Worker};

/// Errors from CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Export result alias.
pub type ExportResult<T> = Result<T, ExportError>;

/// Writes the schedule as CSV to any writer.
///
/// `locations` determines column order; `workers` resolves ids to display
/// names (ids are emitted verbatim for workers not in the list).
pub fn write_schedule_csv<W: Write>(
    schedule: &Schedule,
    locations: &[Location],
    workers: &[Worker],
    writer: W,
) -> ExportResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["date".to_string(), "time".to_string()];
    header.extend(locations.iter().map(column_title));
    out.write_record(&header)?;

    let workers_by_id: HashMap<&str, &Worker> =
        workers.iter().map(|w| (w.id.as_str(), w)).collect();

    for record in &schedule.slots {
        let mut row = vec![
            record.start.format("%Y-%m-%d").to_string(),
            format!(
                "{} - {}",
                record.start.format("%H:%M"),
                record.end.format("%H:%M")
            ),
        ];
        for location in locations {
            row.push(cell_text(record.workers_at(&location.id), &workers_by_id));
        }
        out.write_record(&row)?;
    }

    out.flush()?;
    Ok(())
}

/// Writes the schedule as CSV to a file path.
pub fn export_schedule_csv<P: AsRef<Path>>(
    schedule: &Schedule,
    locations: &[Location],
    workers: &[Worker],
    path: P,
) -> ExportResult<()> {
    let file = File::create(path)?;
    write_schedule_csv(schedule, locations, workers, file)
}

fn column_title(location: &Location) -> String {
    if location.name.is_empty() {
        location.id.clone()
    } else {
        location.name.clone()
    }
}

fn cell_text(worker_ids: &[String], workers_by_id: &HashMap<&str, &Worker>) -> String {
    if worker_ids.is_empty() {
        return "-".to_string();
    }

    worker_ids
        .iter()
        .map(|id| match workers_by_id.get(id.as_str()) {
            Some(worker) => {
                let name = if worker.name.is_empty() {
                    worker.id.as_str()
                } else {
                    worker.name.as_str()
                };
                match worker.role {
                    Role::Manager => format!("{name} (manager)"),
                    Role::Regular => name.to_string(),
                }
            }
            None => id.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
