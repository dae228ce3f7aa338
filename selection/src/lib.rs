//! Seeded, reproducible position assignment.
//!
//! Three interchangeable assigners share one [`PositionAssigner`] interface
//! and draw from a [`tombola_prng::DrawSource`]:
//! - [`UnweightedAssigner`]: uniform index draws, weights ignored
//! - [`AccumulationScanAssigner`]: weighted, resolves draws by scanning
//! - [`TicketTableAssigner`]: weighted, resolves draws through a ticket table
//!
//! [`SelectionSession`] drives one assigner to completion and produces a
//! [`SelectionOutcome`] that anyone holding the seed and the participant list
//! can replay with [`verify_outcome`].

pub mod assigner;
pub mod book;
pub mod observer;
pub mod outcome;
pub mod scan;
pub mod session;
pub mod state;
pub mod tickets;
pub mod unweighted;
pub mod verify;

pub use assigner::{Assignment, PositionAssigner};
pub use book::PositionBook;
pub use observer::{AssignmentObserver, NoopObserver, RecordingObserver, TracingObserver};
pub use outcome::{Placement, SelectionOutcome, TicketAllocation};
pub use scan::AccumulationScanAssigner;
pub use session::{recommended_algorithm, SelectionSession};
pub use state::AssignmentState;
pub use tickets::{TicketTable, TicketTableAssigner};
pub use unweighted::UnweightedAssigner;
pub use verify::{compare, verify_outcome, Verification};
