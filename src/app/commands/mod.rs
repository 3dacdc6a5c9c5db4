//! Command orchestration.

pub mod generate;
