//! wfst-edit - weighted edit distance between sequences
//!
//! Aligns two letter strings or two numeric sequences and prints the
//! minimum-cost transitions together with the total edit distance.

use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use std::io::Write;
use std::process;

use wfst_edit::cli::commands;
use wfst_edit::cli::Cli;

fn main() {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
