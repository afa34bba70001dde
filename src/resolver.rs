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

//! Post-tokenization: classifies identifiers into opcodes and registers,
//! harvests markers, then resolves every remaining identifier to a numeric
//! value from the marker table or the definition table.

use crate::definitions::Definition;
use crate::message::Diagnostic;
use crate::token::{Token, TokenKind};
use crate::vocabulary::{is_mnemonic, is_register};

/// A named code location, declared as `:NAME`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Marker {
    pub name: String,
    pub offset: u32,
}

/// Runs both resolver sweeps over `tokens` (post-extraction).
///
/// Returns the resolved token stream and the harvested marker table, or the
/// full set of "could not match identifier" diagnostics if any identifier
/// resolved to neither a marker nor a definition.
pub fn resolve(
    tokens: Vec<Token>,
    definitions: &[Definition],
) -> Result<(Vec<Token>, Vec<Marker>), Vec<Diagnostic>> {
    // Sweep A: classify opcodes/registers, harvest and drop markers.
    let mut markers = Vec::new();
    let mut sweep_a = Vec::with_capacity(tokens.len());

    for mut token in tokens {
        match token.kind {
            TokenKind::Identifier if is_mnemonic(&token.text) => {
                token.kind = TokenKind::Opcode;
                sweep_a.push(token);
            }
            TokenKind::Identifier if is_register(&token.text) => {
                token.kind = TokenKind::Register;
                sweep_a.push(token);
            }
            TokenKind::Marker => {
                markers.push(Marker { name: token.text, offset: token.offset });
            }
            _ => sweep_a.push(token),
        }
    }

    // Sweep B: resolve remaining identifiers, markers first, then defs.
    let mut diagnostics = Vec::new();
    let mut resolved = Vec::with_capacity(sweep_a.len());

    for mut token in sweep_a {
        if token.kind == TokenKind::Identifier {
            let found = markers
                .iter()
                .find(|m| m.name == token.text)
                .map(|m| m.offset as i64)
                .or_else(|| {
                    definitions
                        .iter()
                        .find(|d| d.name == token.text)
                        .map(|d| d.offset as i64)
                });

            match found {
                Some(value) => {
                    token.kind = TokenKind::Number;
                    token.value = value;
                }
                None => {
                    diagnostics.push(Diagnostic::error(
                        token.line,
                        format!("Could not match identifier '{}'", token.text),
                    ));
                }
            }
        }
        resolved.push(token);
    }

    if diagnostics.is_empty() {
        Ok((resolved, markers))
    } else {
        Err(diagnostics)
    }
}
