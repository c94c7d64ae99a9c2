//! Optional text persistence for symbol tables.
//!
//! The artifact is UTF-8 text with one `token<TAB>id` pair per line. The four
//! reserved symbols come first in fixed order, followed by every token:
//!
//! ```text
//! <eps>	0
//! <del>	1
//! <ins>	2
//! <sub>	3
//! a	4
//! b	5
//! ```
//!
//! Alignment never needs the artifact; it exists so that a table can be
//! inspected or shared with other weighted-FST tooling.

use std::fmt;
use std::fs;
use std::path::Path;

use super::{SymbolTable, Token, FIRST_TOKEN_ID, RESERVED_SYMBOLS};
use crate::error::{EditError, Result};

impl<T: Token> SymbolTable<T> {
    /// Render the table in artifact form.
    ///
    /// Fails with [`EditError::MalformedArtifact`] if a token's text form
    /// contains a tab or a line break, since it could not be read back.
    pub fn to_text(&self) -> Result<String> {
        let mut text = String::new();
        for (name, id) in RESERVED_SYMBOLS {
            text.push_str(&format!("{}\t{}\n", name, id));
        }
        for (line, (id, token)) in self.iter().enumerate() {
            let form = token.to_string();
            if form.contains(&['\t', '\n', '\r'][..]) {
                return Err(EditError::MalformedArtifact {
                    line: line + RESERVED_SYMBOLS.len() + 1,
                    reason: format!("token {:?} cannot be written as text", form),
                });
            }
            text.push_str(&format!("{}\t{}\n", form, id));
        }
        Ok(text)
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_text()?;
        fs::write(path.as_ref(), text)?;
        log::debug!(
            "wrote {} symbol(s) to {}",
            self.num_symbols(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Parse a table from artifact text.
    ///
    /// The reserved lines must appear first with their fixed ids and token
    /// ids must be contiguous from [`FIRST_TOKEN_ID`]. Blank lines are
    /// ignored.
    pub fn from_text(text: &str) -> Result<Self>
    where
        T::Err: fmt::Display,
    {
        let mut table = Self::new();
        let mut seen = 0usize;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            if raw.trim().is_empty() {
                continue;
            }

            let (name, id) = raw.rsplit_once('\t').ok_or_else(|| EditError::MalformedArtifact {
                line,
                reason: "expected <token><TAB><id>".to_string(),
            })?;
            let id: u32 = id.trim().parse().map_err(|_| EditError::MalformedArtifact {
                line,
                reason: format!("invalid id {:?}", id),
            })?;

            if let Some(&(expected_name, expected_id)) = RESERVED_SYMBOLS.get(seen) {
                if name != expected_name || id != expected_id {
                    return Err(EditError::MalformedArtifact {
                        line,
                        reason: format!(
                            "expected reserved symbol {}\t{}, found {}\t{}",
                            expected_name, expected_id, name, id
                        ),
                    });
                }
                seen += 1;
                continue;
            }

            let expected = FIRST_TOKEN_ID + table.num_tokens() as u32;
            if id != expected {
                return Err(EditError::MalformedArtifact {
                    line,
                    reason: format!("expected id {}, found {}", expected, id),
                });
            }
            let token: T = name.parse().map_err(|e: T::Err| EditError::MalformedArtifact {
                line,
                reason: format!("invalid token {:?}: {}", name, e),
            })?;
            table.push(token)?;
            seen += 1;
        }

        if seen < RESERVED_SYMBOLS.len() {
            return Err(EditError::MalformedArtifact {
                line: text.lines().count(),
                reason: "missing reserved symbols".to_string(),
            });
        }
        Ok(table)
    }

    /// Read a table from `path`.
    ///
    /// Fails with [`EditError::MissingArtifact`] if the file does not exist.
    pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        T::Err: fmt::Display,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EditError::MissingArtifact(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Read the table at `path`, creating it from `tokens` if it is missing.
    ///
    /// An existing table may hold more tokens than needed, but it must hold
    /// every token of `tokens`.
    pub fn load_or_create<P, I>(path: P, tokens: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = T>,
        T::Err: fmt::Display,
    {
        let path = path.as_ref();
        let tokens: Vec<T> = tokens.into_iter().collect();
        match Self::read_text(path) {
            Ok(table) => {
                table.ensure_covers(&tokens)?;
                Ok(table)
            }
            Err(EditError::MissingArtifact(_)) => {
                log::warn!("{} does not exist, creating...", path.display());
                let table = Self::build(tokens)?;
                table.write_text(path)?;
                Ok(table)
            }
            Err(e) => Err(e),
        }
    }
}
