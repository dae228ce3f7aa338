//! Assignment progress shared by every assigner.

use serde::{Deserialize, Serialize};

/// `Unassigned -> PartiallyAssigned(k) -> FullyAssigned(n)`.
///
/// Duplicate draws leave the state unchanged; each new binding moves from
/// `k` to `k + 1`. `FullyAssigned` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentState {
    Unassigned,
    PartiallyAssigned(usize),
    FullyAssigned(usize),
}

impl AssignmentState {
    pub fn from_counts(assigned: usize, total: usize) -> Self {
        if assigned >= total {
            AssignmentState::FullyAssigned(total)
        } else if assigned == 0 {
            AssignmentState::Unassigned
        } else {
            AssignmentState::PartiallyAssigned(assigned)
        }
    }

    pub fn assigned(&self) -> usize {
        match *self {
            AssignmentState::Unassigned => 0,
            AssignmentState::PartiallyAssigned(k) | AssignmentState::FullyAssigned(k) => k,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, AssignmentState::FullyAssigned(_))
    }
}
