// This file is part of ccasm, an assembler for the CCA virtual machine.
//
// ccasm is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// ccasm is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ccasm.  If not, see <http://www.gnu.org/licenses/>.

//! The top-level error a failed assembly run returns.
//!
//! One variant per error kind in `spec.md` §7. `Lex`, `Resolution`, and
//! `Encoding` carry every diagnostic their stage collected before aborting
//! (batch reporting); `Io` and `Definition` carry a single diagnostic,
//! since those two stages abort on first occurrence.

use std::path::PathBuf;

use thiserror::Error;

use crate::message::Diagnostic;

/// Everything that can cause an assembly run to abort.
#[derive(Error, Debug)]
pub enum AssembleError {
    /// The input file could not be opened or read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more characters the lexer did not recognize.
    #[error("{} lexical error(s)", .0.len())]
    Lex(Vec<Diagnostic>),

    /// `def` was not followed by an identifier and a string.
    #[error("{0}")]
    Definition(Diagnostic),

    /// One or more identifiers resolved to neither a marker nor a definition.
    #[error("{} unresolved identifier(s)", .0.len())]
    Resolution(Vec<Diagnostic>),

    /// One or more encoding failures: a non-opcode token where an opcode was
    /// expected, or an operand pattern matching no accepted form.
    #[error("{} encoding error(s)", .0.len())]
    Encoding(Vec<Diagnostic>),
}

impl AssembleError {
    /// The diagnostics this error carries, for uniform rendering at the
    /// call site regardless of which stage produced them.
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        match self {
            AssembleError::Io { .. } => Vec::new(),
            AssembleError::Lex(ds) => ds.iter().collect(),
            AssembleError::Definition(d) => vec![d],
            AssembleError::Resolution(ds) => ds.iter().collect(),
            AssembleError::Encoding(ds) => ds.iter().collect(),
        }
    }
}
