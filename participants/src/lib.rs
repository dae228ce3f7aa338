//! Participant loading for tombola draws.

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{load_participants_file, parse_participants_json, participants_from_value};
