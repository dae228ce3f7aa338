//! JSON participant records.
//!
//! The input is a JSON array of objects. Each object must carry a string id
//! field and a non-negative integer weight field; field names come from
//! [`FieldNames`]. The whole object is kept as the participant payload so
//! exporters can write it back augmented with results.

use std::path::Path;

use serde_json::Value;
use tombola_types::{FieldNames, Participant, TombolaError};

use crate::error::LoadError;

/// Parse participants from JSON text, failing on the first bad record.
pub fn parse_participants_json(text: &str, fields: &FieldNames) -> Result<Vec<Participant>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(participants_from_value(value, fields)?)
}

/// Read and parse a participants file.
pub fn load_participants_file(path: &Path, fields: &FieldNames) -> Result<Vec<Participant>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let participants = parse_participants_json(&text, fields)?;
    tracing::info!(
        path = %path.display(),
        participants = participants.len(),
        "loaded participants"
    );
    Ok(participants)
}

/// Convert an already parsed JSON document into participants.
pub fn participants_from_value(value: Value, fields: &FieldNames) -> Result<Vec<Participant>, TombolaError> {
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(TombolaError::Schema {
                record: 0,
                reason: format!("expected an array of records, found {}", kind(&other)),
            })
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| participant_from_record(index, record, fields))
        .collect()
}

fn participant_from_record(
    index: usize,
    record: Value,
    fields: &FieldNames,
) -> Result<Participant, TombolaError> {
    let schema = |reason: String| TombolaError::Schema {
        record: index,
        reason,
    };

    let object = record
        .as_object()
        .ok_or_else(|| schema(format!("expected an object, found {}", kind(&record))))?;

    let id = match object.get(&fields.id) {
        Some(Value::String(id)) => id.clone(),
        Some(other) => {
            return Err(schema(format!(
                "field {:?} must be a string, found {}",
                fields.id,
                kind(other)
            )))
        }
        None => return Err(schema(format!("missing field {:?}", fields.id))),
    };

    let weight = match object.get(&fields.weight) {
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| {
            schema(format!(
                "field {:?} of {id:?} must be a non-negative integer, found {n}",
                fields.weight
            ))
        })?,
        Some(other) => {
            return Err(schema(format!(
                "field {:?} of {id:?} must be a number, found {}",
                fields.weight,
                kind(other)
            )))
        }
        None => return Err(schema(format!("missing field {:?} for {id:?}", fields.weight))),
    };

    Ok(Participant::new(id, weight).with_payload(record))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
