//! Command-line interface for the `wdg` tool.

pub mod commands;
