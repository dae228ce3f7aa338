//! Input records augmented with draw results.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tombola_selection::SelectionOutcome;
use tombola_types::{FieldNames, Participant};

use crate::error::ExportError;

/// One output row per placement, in position order.
///
/// Each row is the participant's original record plus the position field;
/// in ticket-table mode the tickets field lists every ticket it held.
/// `participants` may be in any order.
pub fn position_records(
    outcome: &SelectionOutcome,
    participants: &[Participant],
    fields: &FieldNames,
) -> Result<Vec<Map<String, Value>>, ExportError> {
    let by_id: HashMap<&str, &Participant> =
        participants.iter().map(|p| (p.id.as_str(), p)).collect();

    outcome
        .placements
        .iter()
        .map(|placement| {
            let participant = by_id
                .get(placement.id.as_str())
                .ok_or_else(|| ExportError::MissingParticipant(placement.id.clone()))?;

            let mut record = match &participant.payload {
                Value::Object(map) => map.clone(),
                _ => {
                    let mut map = Map::new();
                    map.insert(fields.id.clone(), Value::from(participant.id.clone()));
                    map.insert(fields.weight.clone(), Value::from(participant.weight));
                    map
                }
            };

            record.insert(fields.position.clone(), Value::from(placement.position));
            if let Some(tickets) = outcome.tickets_of(&placement.id) {
                record.insert(
                    fields.tickets.clone(),
                    Value::Array(tickets.map(Value::from).collect()),
                );
            }
            Ok(record)
        })
        .collect()
}
