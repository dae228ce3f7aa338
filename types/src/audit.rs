//! Per-draw audit records.

use serde::{Deserialize, Serialize};

/// One assigner-level draw.
///
/// Draws discarded by rejection sampling inside the PRNG never produce an
/// entry; duplicate draws (winner already positioned) always do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// 0-based index of this draw within the session.
    pub draw_index: u64,
    /// PRNG counter value that produced the accepted raw draw.
    pub counter: u64,
    /// Sampled value: a participant index or a ticket number.
    pub raw_draw: u64,
    /// Id of the participant the draw resolved to.
    pub participant: String,
    /// Position bound by this draw; `None` for a duplicate.
    pub position: Option<u64>,
}

impl AuditEntry {
    pub fn is_duplicate(&self) -> bool {
        self.position.is_none()
    }
}
