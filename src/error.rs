//! Error types for alphabet construction, automaton building and alignment.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or aligning weighted automata.
#[derive(Debug, Error)]
pub enum EditError {
    /// A cost model threshold was negative, NaN or infinite.
    #[error("Invalid distance threshold {0}: must be finite and non-negative")]
    InvalidThreshold(f64),

    /// An edit penalty was negative, NaN or infinite.
    #[error("Invalid {name} penalty {value}: must be finite and non-negative")]
    InvalidPenalty {
        /// Which penalty was rejected (`miss`, `insertion` or `deletion`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A numeric token could not be constructed (NaN or unparsable).
    #[error("Invalid numeric token: {0}")]
    InvalidNumber(String),

    /// The same token would receive two symbol ids.
    ///
    /// Tables built from a token set never hit this; it signals a corrupt
    /// symbol artifact or a bug in id assignment.
    #[error("Token {token} assigned twice (ids {first} and {second})")]
    DuplicateToken {
        /// Display form of the offending token
        token: String,
        /// Id assigned first
        first: u32,
        /// Id that would have been assigned second
        second: u32,
    },

    /// A token has no id in the symbol table.
    #[error("Token {0} is not present in the symbol table")]
    UnknownToken(String),

    /// An arc label does not name a symbol of the table.
    #[error("Label {0} is not a valid symbol id")]
    InvalidLabel(u32),

    /// The composed automaton has no path from the start to a final state.
    #[error("No path to a final state in the composed automaton")]
    NoPath,

    /// A topological order was requested for an automaton with a cycle.
    #[error("Automaton is cyclic; no topological order exists")]
    Cyclic,

    /// The symbol-table artifact was expected but does not exist.
    #[error("Symbol table {} does not exist", .0.display())]
    MissingArtifact(PathBuf),

    /// A line of the symbol-table artifact could not be parsed.
    #[error("Malformed symbol table at line {line}: {reason}")]
    MalformedArtifact {
        /// 1-based line number
        line: usize,
        /// Human readable description
        reason: String,
    },

    /// I/O failure while reading or writing the symbol-table artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for weighted edit distance operations.
pub type Result<T> = std::result::Result<T, EditError>;
