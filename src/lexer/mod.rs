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

//! Lexical analysis.
//!
//! A single forward pass over the source bytes that produces a token
//! stream while simultaneously predicting the byte address each token
//! will occupy in the eventual code section (`spec.md` §4.1). The
//! prediction is self-consistent with the encoder: see
//! [`crate::vocabulary::is_register_or_mnemonic`] for the classification
//! both sides share.

mod ident;
mod number;
mod string;
#[cfg(test)]
mod tests;

use crate::message::Diagnostic;
use crate::token::{Token, TokenKind};
use crate::vocabulary::is_register_or_mnemonic;

/// Runs the lexer over `source`, returning the token stream or the full set
/// of "unexpected symbol" diagnostics collected across the pass.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<Diagnostic>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    let mut i = 0usize;
    let mut line = 1u32;
    let mut byte_index = 0u32;
    let mut saw_def = false;

    while i < bytes.len() {
        let c = bytes[i];

        match c {
            b' ' | b'\t' | b'\r' => {
                i += 1;
            }
            b'\n' => {
                line += 1;
                i += 1;
            }
            b';' => {
                line += 1;
                i += 1;
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                if i < bytes.len() {
                    i += 1; // consume the newline itself
                }
            }
            b':' => {
                i += 1;
                let (name, next) = ident::scan(bytes, i);
                tokens.push(Token::new(TokenKind::Marker, line, byte_index).with_text(name));
                i = next;
            }
            b',' => {
                tokens.push(Token::new(TokenKind::Divider, line, byte_index).with_text(","));
                i += 1;
            }
            b'&' => {
                i += 1;
                if i < bytes.len() && bytes[i].is_ascii_digit() {
                    let (value, next) = number::scan(bytes, i);
                    tokens.push(Token::new(TokenKind::Address, line, byte_index).with_value(value));
                    byte_index += 4;
                    i = next;
                } else {
                    diagnostics.push(Diagnostic::error(line, "expected a number after '&'"));
                }
            }
            b'\'' | b'"' => {
                i += 1;
                let (text, closing) = string::scan(bytes, i);
                tokens.push(Token::new(TokenKind::String, line, byte_index).with_text(text));
                i = match closing {
                    Some(end) => end + 1,
                    None => {
                        diagnostics.push(Diagnostic::error(line, "unterminated string literal"));
                        bytes.len()
                    }
                };
            }
            b'0'..=b'9' => {
                let (value, next) = number::scan(bytes, i);
                tokens.push(Token::new(TokenKind::Number, line, byte_index).with_value(value));
                byte_index += 4;
                i = next;
            }
            b if ident::is_ident_char(b) => {
                let (word, next) = ident::scan(bytes, i);
                i = next;

                let start_offset = byte_index;

                if saw_def {
                    saw_def = false;
                } else if word == "def" {
                    saw_def = true;
                } else if is_register_or_mnemonic(&word) {
                    byte_index += 1;
                } else {
                    byte_index += 4;
                }

                tokens.push(Token::new(TokenKind::Identifier, line, start_offset).with_text(word));
            }
            _ => {
                diagnostics.push(Diagnostic::error(line, "unexpected symbol"));
                i += 1;
            }
        }
    }

    if diagnostics.is_empty() {
        Ok(tokens)
    } else {
        Err(diagnostics)
    }
}
