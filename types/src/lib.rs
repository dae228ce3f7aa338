//! Fundamental types for tombola draws.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the public seed, participants, audit entries, selection parameters and the
//! common error type.

pub mod audit;
pub mod error;
pub mod params;
pub mod participant;
pub mod seed;

pub use audit::AuditEntry;
pub use error::{SeedRule, TombolaError};
pub use params::{Algorithm, FieldNames};
pub use participant::{sort_participants, total_weight, Participant};
pub use seed::{Seed, SEED_BITS, SEED_BYTES};
