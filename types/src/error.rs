//! Top-level error type shared across crates.

use std::fmt;

use thiserror::Error;

/// Which seed encoding rule a malformed seed broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedRule {
    /// Missing `0x` prefix.
    Prefix,
    /// Non-hexadecimal characters (including embedded whitespace).
    Charset,
    /// Decoded byte length differs from the configured seed width.
    Length,
}

impl fmt::Display for SeedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeedRule::Prefix => "must start with \"0x\"",
            SeedRule::Charset => "contains non-hex characters",
            SeedRule::Length => "wrong length",
        };
        f.write_str(s)
    }
}

/// Common error type for seeding, sampling and position assignment.
///
/// Every variant is fatal for the session that raised it. Bindings applied
/// before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum TombolaError {
    #[error("bad seed: {rule} ({value:?})")]
    Format { rule: SeedRule, value: String },

    #[error("bad participant record #{record}: {reason}")]
    Schema { record: usize, reason: String },

    #[error("bad range [{min}, {max}): {reason}")]
    Range { min: i64, max: i64, reason: String },

    #[error("participant {id:?} has non-positive weight {weight}")]
    Weight { id: String, weight: u64 },

    #[error("inconsistency: {0}")]
    Consistency(String),
}

impl TombolaError {
    pub(crate) fn format(rule: SeedRule, value: &str) -> Self {
        TombolaError::Format {
            rule,
            value: value.to_string(),
        }
    }

    pub fn range(min: i64, max: i64, reason: impl Into<String>) -> Self {
        TombolaError::Range {
            min,
            max,
            reason: reason.into(),
        }
    }
}
