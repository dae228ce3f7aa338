//! Draw participants and their canonical ordering.

use serde::{Deserialize, Serialize};

use crate::error::TombolaError;

/// One entry in the draw pool.
///
/// `payload` carries the original input record untouched; the selection
/// core only reads `id` and `weight`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub weight: u64,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Participant {
    pub fn new(id: impl Into<String>, weight: u64) -> Self {
        Self {
            id: id.into(),
            weight,
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

/// Sort participants by id (byte-wise) and reject duplicate ids.
///
/// This order is the ticket order; every independent replay must use it.
pub fn sort_participants(participants: Vec<Participant>) -> Result<Vec<Participant>, TombolaError> {
    let mut indexed: Vec<(usize, Participant)> = participants.into_iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| a.id.as_bytes().cmp(b.id.as_bytes()));

    for pair in indexed.windows(2) {
        if pair[0].1.id == pair[1].1.id {
            let record = pair[0].0.max(pair[1].0);
            return Err(TombolaError::Schema {
                record,
                reason: format!("duplicate id {:?}", pair[1].1.id),
            });
        }
    }

    Ok(indexed.into_iter().map(|(_, p)| p).collect())
}

/// Sum of all weights, failing instead of wrapping.
pub fn total_weight(participants: &[Participant]) -> Result<u64, TombolaError> {
    participants.iter().try_fold(0u64, |sum, p| {
        sum.checked_add(p.weight).ok_or_else(|| {
            TombolaError::Consistency(format!("total weight overflows at participant {:?}", p.id))
        })
    })
}
