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

//! Definition extraction: pulls `def NAME "STRING"` triples out of the
//! token stream and assigns each a data-section offset.

use crate::message::Diagnostic;
use crate::token::{Token, TokenKind};

/// A named constant string, as declared by `def NAME "VALUE"`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Definition {
    pub name: String,

    /// The literal value exactly as written, escape sequences still
    /// encoded (`\n` is the two characters backslash-n, not a newline).
    pub raw_value: String,

    /// Byte offset into the data section at which this value begins.
    pub offset: u32,
}

/// Scans `tokens` for `def NAME "STRING"` triples, removing each from the
/// stream and recording a [`Definition`] for it.
///
/// The data-section cursor advances by the *raw* (escape-encoded) length of
/// each value, matching the source this extractor is modeled on — see
/// `SPEC_FULL.md` §10 for why this is pinned rather than "fixed".
pub fn extract(tokens: Vec<Token>) -> Result<(Vec<Token>, Vec<Definition>), Diagnostic> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut definitions = Vec::new();
    let mut cursor: u32 = 0;

    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if token.kind == TokenKind::Identifier && token.text == "def" {
            let name_tok = iter.next();
            let value_tok = iter.next();

            let (name_tok, value_tok) = match (name_tok, value_tok) {
                (Some(n), Some(v))
                    if n.kind == TokenKind::Identifier && v.kind == TokenKind::String =>
                {
                    (n, v)
                }
                _ => {
                    return Err(Diagnostic::error(
                        token.line,
                        "Unknown syntax in definition statement",
                    ));
                }
            };

            definitions.push(Definition {
                name: name_tok.text,
                offset: cursor,
                raw_value: value_tok.text.clone(),
            });
            cursor += value_tok.text.len() as u32;
        } else {
            kept.push(token);
        }
    }

    Ok((kept, definitions))
}
