//! Command implementations.

/// Documentation generation pipeline.
pub mod generate;
