//! Command-line interface for the `gwalk` tool.

pub mod commands;
