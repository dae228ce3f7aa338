//! Nullable infrastructure for deterministic testing.
//!
//! Swap a [`ScriptedDraws`] in wherever a `DrawSource` is expected to force
//! exact draw sequences, e.g. to exercise duplicate draws or boundary tickets
//! without searching for a seed that produces them.

pub mod random;

pub use random::ScriptedDraws;
