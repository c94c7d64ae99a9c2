//! CLI interface for wfst-edit
//!
//! Argument parsing, configuration file handling and alignment rendering for
//! the `wfst-edit` binary.

pub mod args;
pub mod commands;
pub mod config;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};
pub use config::{config_dir, default_config_path, PersistentConfig};
