//! Observers notified after every assigner state transition.
//!
//! The assigners never log; anything that wants to watch a draw (console
//! output, progress reporting, test recording) plugs in here.

use tombola_types::AuditEntry;

use crate::assigner::Assignment;

/// Longest id prefix shown in log lines.
const LOG_ID_CHARS: usize = 20;

/// Callbacks invoked by an assigner after each draw it resolves.
pub trait AssignmentObserver {
    /// A participant was bound to the next free position.
    fn on_assigned(&mut self, _assignment: &Assignment) {}

    /// A draw hit a participant that already had a position.
    fn on_duplicate(&mut self, _entry: &AuditEntry) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl AssignmentObserver for NoopObserver {}

/// Observer that reports assignments through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AssignmentObserver for TracingObserver {
    fn on_assigned(&mut self, assignment: &Assignment) {
        tracing::info!(
            participant = short_id(&assignment.participant),
            position = assignment.position,
            weight = assignment.weight,
            draw = assignment.draw,
            "assigned position"
        );
    }

    fn on_duplicate(&mut self, entry: &AuditEntry) {
        tracing::debug!(
            participant = short_id(&entry.participant),
            draw_index = entry.draw_index,
            "participant already has a position, drawing again"
        );
    }
}

/// Observer that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub assigned: Vec<Assignment>,
    pub duplicates: Vec<AuditEntry>,
}

impl AssignmentObserver for RecordingObserver {
    fn on_assigned(&mut self, assignment: &Assignment) {
        self.assigned.push(assignment.clone());
    }

    fn on_duplicate(&mut self, entry: &AuditEntry) {
        self.duplicates.push(entry.clone());
    }
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(LOG_ID_CHARS) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
