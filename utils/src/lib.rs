//! Shared utilities for tombola binaries.

pub mod logging;

pub use logging::{init_logging, LogFormat};
