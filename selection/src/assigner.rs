//! The position-assigner capability shared by every draw algorithm.

use serde::{Deserialize, Serialize};
use tombola_types::{Algorithm, TombolaError};

use crate::book::PositionBook;
use crate::observer::AssignmentObserver;
use crate::state::AssignmentState;
use crate::tickets::TicketTable;

/// A participant bound to a position by one draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub position: u64,
    pub participant: String,
    pub weight: u64,
    /// The sampled value that won the position.
    pub draw: u64,
    pub draw_index: u64,
}

/// Assigns positions `0..N` to a participant pool, one draw at a time.
pub trait PositionAssigner {
    fn algorithm(&self) -> Algorithm;

    /// Participants, bound positions and the audit log.
    fn book(&self) -> &PositionBook;

    /// Current draw counter of the underlying source.
    fn counter(&self) -> u64;

    /// Ticket allocation, for assigners that precompute one.
    fn ticket_table(&self) -> Option<&TicketTable> {
        None
    }

    /// Draw until one more position is bound.
    ///
    /// Once every participant has a position this returns `Ok(None)` without
    /// drawing.
    fn assign_next(
        &mut self,
        observer: &mut dyn AssignmentObserver,
    ) -> Result<Option<Assignment>, TombolaError>;

    /// Bind every remaining position.
    fn assign_all(&mut self, observer: &mut dyn AssignmentObserver) -> Result<(), TombolaError> {
        while !self.state().is_complete() {
            self.assign_next(observer)?;
        }
        Ok(())
    }

    fn state(&self) -> AssignmentState {
        self.book().state()
    }
}
