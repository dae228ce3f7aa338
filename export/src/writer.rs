//! File writers for each export format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tombola_selection::SelectionOutcome;
use tombola_types::AuditEntry;

use crate::error::ExportError;
use crate::format::ExportFormat;

/// `base` with `suffix` appended to its file name.
pub fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Write position records to `<base>.<ext>` for each format.
pub fn export_positions(
    base: &Path,
    formats: &[ExportFormat],
    records: &[Map<String, Value>],
) -> Result<Vec<PathBuf>, ExportError> {
    formats
        .iter()
        .map(|format| {
            let path = with_suffix(base, &format!(".{}", format.extension()));
            let writer = create(&path)?;
            match format {
                ExportFormat::Json => write_json(writer, records, &path)?,
                ExportFormat::Csv => write_record_csv(writer, records)?,
            }
            tracing::info!(path = %path.display(), rows = records.len(), "wrote positions");
            Ok(path)
        })
        .collect()
}

/// Write the audit log to `<base>.audit.<ext>` for each format.
pub fn export_audit(
    base: &Path,
    formats: &[ExportFormat],
    audit: &[AuditEntry],
) -> Result<Vec<PathBuf>, ExportError> {
    formats
        .iter()
        .map(|format| {
            let path = with_suffix(base, &format!(".audit.{}", format.extension()));
            let writer = create(&path)?;
            match format {
                ExportFormat::Json => write_json(writer, audit, &path)?,
                ExportFormat::Csv => {
                    let mut csv = csv::Writer::from_writer(writer);
                    for entry in audit {
                        csv.serialize(entry)?;
                    }
                    csv.flush().map_err(|source| io_error(&path, source))?;
                }
            }
            tracing::info!(path = %path.display(), draws = audit.len(), "wrote audit log");
            Ok(path)
        })
        .collect()
}

/// Write the full outcome to `<base>.manifest.json` for later replay.
pub fn write_manifest(base: &Path, outcome: &SelectionOutcome) -> Result<PathBuf, ExportError> {
    let path = with_suffix(base, ".manifest.json");
    write_json(create(&path)?, outcome, &path)?;
    tracing::info!(path = %path.display(), "wrote manifest");
    Ok(path)
}

/// Read a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<SelectionOutcome, ExportError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    path: &Path,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|source| io_error(path, source))
}

/// Records as CSV: columns in first-seen key order, every field quoted,
/// nested values JSON-encoded.
fn write_record_csv<W: Write>(writer: W, records: &[Map<String, Value>]) -> Result<(), ExportError> {
    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);
    if !columns.is_empty() {
        csv.write_record(&columns)?;
    }
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| match record.get(*column) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        csv.write_record(&row)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}
