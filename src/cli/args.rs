//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wfst-edit")]
#[command(about = "Weighted edit distance between sequences via transducer composition")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Penalty of a substitution without a soft weight [default: 1.0]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub miss_penalty: Option<f64>,

    /// Penalty of an insertion [default: 1.0]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub insertion_penalty: Option<f64>,

    /// Penalty of a deletion [default: 1.0]
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub deletion_penalty: Option<f64>,

    /// Symbol table file (token<TAB>id), created if missing
    #[arg(long, global = true)]
    pub symbols: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align two words with keyboard-proximity substitutions
    Keyboard {
        /// Source word
        input: String,

        /// Target word
        target: String,

        /// Maximum key distance for a soft substitution [default: 1.9]
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Align two words with flat penalties only
    Letters {
        /// Source word
        input: String,

        /// Target word
        target: String,
    },

    /// Align two sequences of numbers
    Numeric {
        /// Source numbers
        #[arg(long, num_args = 0.., allow_negative_numbers = true, required = true)]
        input: Vec<f64>,

        /// Target numbers
        #[arg(long, num_args = 0.., allow_negative_numbers = true, required = true)]
        target: Vec<f64>,

        /// Maximum numeric distance for a soft substitution [default: 1.0]
        #[arg(long, allow_negative_numbers = true)]
        distance_thold: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable transition listing
    Text,
    /// Alignment as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
