//! Session results, owned separately from the caller's participant records.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tombola_types::{Algorithm, AuditEntry, Seed};

/// A participant and the position it won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: u64,
    pub id: String,
    pub weight: u64,
    /// Ticket that won the position (ticket-table mode only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_ticket: Option<u64>,
}

/// The contiguous ticket range held by one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAllocation {
    pub id: String,
    pub first: u64,
    pub count: u64,
}

impl TicketAllocation {
    pub fn tickets(&self) -> Range<u64> {
        self.first..self.first + self.count
    }
}

/// Everything needed to publish and independently replay a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    pub algorithm: Algorithm,
    pub seed: Seed,
    pub start_counter: u64,
    pub final_counter: u64,
    pub participant_count: usize,
    pub total_weight: u64,
    /// Placements in position order.
    pub placements: Vec<Placement>,
    /// Ticket allocation in id order; empty unless ticket-table mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tickets: Vec<TicketAllocation>,
    pub audit: Vec<AuditEntry>,
}

impl SelectionOutcome {
    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.participant_count
    }

    pub fn tickets_of(&self, id: &str) -> Option<Range<u64>> {
        self.tickets
            .iter()
            .find(|t| t.id == id)
            .map(TicketAllocation::tickets)
    }

    /// Number of draws that hit an already positioned participant.
    pub fn duplicate_draws(&self) -> usize {
        self.audit.iter().filter(|e| e.is_duplicate()).count()
    }
}
