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

//! Top-level assembler interface: owns one pipeline run end to end.

use std::fs;

use colored::Colorize;

use crate::definitions::{self, Definition};
use crate::encoder;
use crate::error::AssembleError;
use crate::lexer;
use crate::resolver::{self, Marker};
use crate::token::Token;
use crate::writer;

/// Options controlling a single assembly run.
///
/// This is the pipeline's half of the caller-facing invocation surface in
/// `spec.md` §6; `silent` and `watch` are progress/process concerns owned
/// by the `ccasm` binary rather than the pipeline itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// After each pass, dump tokens, definitions, or markers to stdout.
    pub debug: bool,
}

/// Owns one assembly run: lexing, definition extraction, resolution,
/// encoding, and binary assembly, with an optional debug dump of
/// intermediate state between passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Assembler {
    options: Options,
}

impl Assembler {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Reads `path` as UTF-8 text and assembles it into a CCB image.
    pub fn assemble_file(&self, path: &str) -> Result<Vec<u8>, AssembleError> {
        let source = fs::read_to_string(path).map_err(|source| AssembleError::Io {
            path: path.into(),
            source,
        })?;
        self.assemble_str(&source)
    }

    /// Assembles `source` text directly, with no file I/O.
    pub fn assemble_str(&self, source: &str) -> Result<Vec<u8>, AssembleError> {
        let tokens = lexer::lex(source).map_err(AssembleError::Lex)?;

        let (tokens, defs) = definitions::extract(tokens).map_err(AssembleError::Definition)?;

        if self.options.debug {
            print_tokens(&tokens);
            print_definitions(&defs);
        }

        let (tokens, markers) = resolver::resolve(tokens, &defs).map_err(AssembleError::Resolution)?;

        if self.options.debug {
            print_markers(&markers);
        }

        let code = encoder::encode(&tokens).map_err(AssembleError::Encoding)?;

        Ok(writer::build_image(&defs, &code))
    }

    /// Assembles `source` without needing an [`Assembler`] instance first —
    /// a convenience for callers (and the integration tests) that only care
    /// about the resulting bytes.
    pub fn assemble_bytes(source: &str) -> Result<Vec<u8>, AssembleError> {
        Self::default().assemble_str(source)
    }
}

/// Renders the box-drawn token dump the `debug` option produces.
fn print_tokens(tokens: &[Token]) {
    println!("{} Lexical analyzer result:", "[DEBUG]".blue());
    println!("╭──────┬────────┬───────────┬──────────────────────╮");
    println!("│ LINE │ OFFSET │ KIND      │ VALUE                │");
    println!("╞══════╪════════╪═══════════╪══════════════════════╡");
    for t in tokens {
        println!(
            "│ {:4} │ {:6} │ {:9} │ {:<20.20} │",
            t.line,
            t.offset,
            t.kind.to_string(),
            t.display_value(),
        );
    }
    println!("╰──────┴────────┴───────────┴──────────────────────╯");
    println!();
}

fn print_definitions(defs: &[Definition]) {
    println!("{} Definitions found:", "[DEBUG]".blue());
    for d in defs {
        println!("  {} = {:?} (offset {})", d.name, d.raw_value, d.offset);
    }
    println!();
}

fn print_markers(markers: &[Marker]) {
    println!("{} Markers found:", "[DEBUG]".blue());
    for m in markers {
        println!("  {} -> offset {}", m.name, m.offset);
    }
    println!();
}
