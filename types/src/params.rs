//! Selection parameters shared by the loader, the session and the exporters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which assigner drives a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Uniform index draws; weights are ignored.
    Unweighted,
    /// Weighted draws resolved by scanning accumulated weight.
    WeightedScan,
    /// Weighted draws resolved through a precomputed ticket table.
    WeightedTickets,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Unweighted => "unweighted",
            Algorithm::WeightedScan => "weighted-scan",
            Algorithm::WeightedTickets => "weighted-tickets",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unweighted" => Ok(Algorithm::Unweighted),
            "weighted-scan" | "scan" => Ok(Algorithm::WeightedScan),
            "weighted-tickets" | "tickets" | "weighted" => Ok(Algorithm::WeightedTickets),
            other => Err(format!("unknown algorithm {other:?}")),
        }
    }
}

/// Record field names used when reading participants and writing results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    #[serde(default = "default_id_field")]
    pub id: String,

    #[serde(default = "default_weight_field")]
    pub weight: String,

    #[serde(default = "default_position_field")]
    pub position: String,

    /// Only written in ticket-table mode.
    #[serde(default = "default_tickets_field")]
    pub tickets: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_id_field() -> String {
    "id".to_string()
}

fn default_weight_field() -> String {
    "weight".to_string()
}

fn default_position_field() -> String {
    "position".to_string()
}

fn default_tickets_field() -> String {
    "tickets".to_string()
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            id: default_id_field(),
            weight: default_weight_field(),
            position: default_position_field(),
            tickets: default_tickets_field(),
        }
    }
}
