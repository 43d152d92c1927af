//! CLI command definitions

pub mod commands;
