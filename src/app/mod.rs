//! Application layer: CLI adapter, command orchestration, and configuration.

pub mod cli;
pub mod commands;
pub mod config;
