//! Result export for tombola draws.
//!
//! Positions are written as the caller's original records plus result
//! fields; the audit log and the replay manifest are written as-is.

pub mod error;
pub mod format;
pub mod records;
pub mod writer;

pub use error::ExportError;
pub use format::ExportFormat;
pub use records::position_records;
pub use writer::{export_audit, export_positions, read_manifest, with_suffix, write_manifest};
