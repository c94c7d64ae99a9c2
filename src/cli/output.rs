//! Alignment rendering

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;

use super::args::OutputFormat;
use crate::edit::Alignment;

/// Render an alignment in the requested format
///
/// `Text` is the transition listing of [`Alignment`]'s `Display`; `Json`
/// is the serde representation, pretty-printed.
pub fn render<T>(alignment: &Alignment<T>, format: OutputFormat) -> Result<String>
where
    T: Display + Serialize,
{
    match format {
        OutputFormat::Text => Ok(alignment.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(alignment).context("Failed to serialize alignment")
        }
    }
}
