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

//! Lexical tokens.

use std::fmt::{self, Display, Formatter};

/// The kind of a lexical token.
///
/// `Identifier` is reclassified into `Opcode`, `Register`, or `Number`
/// during resolution (see [`crate::resolver`]); after resolution no
/// `Identifier` tokens remain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    /// A name not yet known to be a mnemonic, register, or reference.
    Identifier,

    /// An integer literal, or an identifier resolved to a marker/definition
    /// offset.
    Number,

    /// The `,` operand separator.
    Divider,

    /// A recognized instruction mnemonic.
    Opcode,

    /// One of the registers `a`, `b`, `c`, `d`.
    Register,

    /// A `:NAME` label declaration.
    Marker,

    /// An `&N` memory address immediate.
    Address,

    /// A quoted string literal.
    String,

    /// End of the token stream.
    End,

    /// Reserved for unrecognized input; never produced by the lexer, which
    /// instead records a diagnostic and continues (see `spec.md` §4.1).
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number     => "number",
            TokenKind::Divider    => "divider",
            TokenKind::Opcode     => "opcode",
            TokenKind::Register   => "register",
            TokenKind::Marker     => "marker",
            TokenKind::Address    => "address",
            TokenKind::String     => "string",
            TokenKind::End        => "end",
            TokenKind::Unknown    => "unknown",
        })
    }
}

/// A lexical token.
///
/// Created by the [`crate::lexer`]; `kind` and `value` are mutated in place
/// by [`crate::definitions`] and [`crate::resolver`]; consumed by
/// [`crate::encoder`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,

    /// 1-based source line on which the token began.
    pub line: u32,

    /// Textual payload: identifier/register/opcode name, marker name, or
    /// raw string literal body. Empty for tokens that carry no text.
    pub text: String,

    /// Numeric payload for `Number` and `Address` tokens. Unused otherwise.
    pub value: i64,

    /// Byte offset this token will occupy in the code section.
    pub offset: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, offset: u32) -> Self {
        Self { kind, line, text: String::new(), value: 0, offset }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Renders the payload relevant to this token's kind, for debug dumps.
    pub fn display_value(&self) -> String {
        match self.kind {
            TokenKind::Number | TokenKind::Address => self.value.to_string(),
            _ => self.text.clone(),
        }
    }
}
