//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

use crate::cost::{CostModel, FlatCost, KeyboardLayout, NumericThreshold};
use crate::edit::{numbers, Aligner, AlignerBuilder, Alignment};
use crate::symbol::{SymbolTable, Token};

use super::args::{Cli, Commands, OutputFormat};
use super::config::PersistentConfig;
use super::output::render;

/// Execute a CLI command, printing the rendered alignment
pub fn execute(cli: Cli) -> Result<()> {
    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

/// Execute a CLI command and return the rendered alignment
pub fn run(cli: &Cli) -> Result<String> {
    let config =
        PersistentConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;

    let (keyboard_threshold, numeric_threshold) = match &cli.command {
        Commands::Keyboard { threshold, .. } => (*threshold, None),
        Commands::Numeric { distance_thold, .. } => (None, *distance_thold),
        Commands::Letters { .. } => (None, None),
    };
    let settings = config.merge_with_cli(
        cli.miss_penalty,
        cli.insertion_penalty,
        cli.deletion_penalty,
        keyboard_threshold,
        numeric_threshold,
    );
    let penalties = settings.penalties().context("Invalid edit penalties")?;
    let builder = AlignerBuilder::new().penalties(penalties);
    let symbols = cli.symbols.as_deref();

    match &cli.command {
        Commands::Keyboard { input, target, .. } => {
            let layout = KeyboardLayout::qwerty(settings.keyboard_threshold())
                .context("Invalid keyboard threshold")?;
            let aligner = builder.cost_model(layout).build()?;
            cmd_align(&aligner, &chars(input), &chars(target), symbols, cli.format)
        }
        Commands::Letters { input, target } => {
            let aligner = builder.cost_model(FlatCost).build()?;
            cmd_align(&aligner, &chars(input), &chars(target), symbols, cli.format)
        }
        Commands::Numeric { input, target, .. } => {
            let model = NumericThreshold::new(settings.numeric_threshold())
                .context("Invalid numeric threshold")?;
            let aligner = builder.cost_model(model).build()?;
            let input = numbers(input).context("Invalid input sequence")?;
            let target = numbers(target).context("Invalid target sequence")?;
            cmd_align(&aligner, &input, &target, symbols, cli.format)
        }
    }
}

fn cmd_align<T, C>(
    aligner: &Aligner<C>,
    source: &[T],
    target: &[T],
    symbols: Option<&Path>,
    format: OutputFormat,
) -> Result<String>
where
    T: Token + Serialize,
    T::Err: Display,
    C: CostModel<T>,
{
    let alignment: Alignment<T> = match symbols {
        Some(path) => {
            let table = SymbolTable::load_or_create(path, source.iter().chain(target).cloned())
                .with_context(|| format!("Failed to load symbol table: {}", path.display()))?;
            aligner
                .align_with_table(source, target, &table)
                .context("Alignment failed")?
        }
        None => aligner.align(source, target).context("Alignment failed")?,
    };
    render(&alignment, format)
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
