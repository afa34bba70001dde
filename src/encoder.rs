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

//! Instruction encoding.
//!
//! The mnemonic/operand dispatch is a table mapping each mnemonic to an
//! ordered list of `(operand pattern, opcode byte)` rows, tried in order —
//! rather than a branch cascade — so adding or adjusting an opcode is a
//! one-line change to [`ROWS`] (see `spec.md` §9 REDESIGN FLAGS).

use crate::message::Diagnostic;
use crate::token::{Token, TokenKind};
use crate::vocabulary::register_index;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operand {
    Register,
    Number,
    Address,
}

impl Operand {
    fn describe(self) -> &'static str {
        match self {
            Operand::Register => "<register>",
            Operand::Number => "<number>",
            Operand::Address => "<address>",
        }
    }

    fn matches(self, token: &Token) -> bool {
        match self {
            Operand::Register => token.kind == TokenKind::Register,
            Operand::Number => token.kind == TokenKind::Number,
            Operand::Address => token.kind == TokenKind::Address,
        }
    }
}

type Pattern = &'static [Operand];
type Row = (Pattern, u8);

/// The mnemonic/operand dispatch table. Rows for a mnemonic are tried in
/// the listed order; the first pattern that matches wins.
#[rustfmt::skip]
const ROWS: &[(&str, &[Row])] = &[
    ("stp",     &[(&[], 0x00)]),
    ("syscall", &[(&[], 0xff)]),

    ("push", &[
        (&[Operand::Number],   0x01),
        (&[Operand::Register], 0x02),
        (&[Operand::Address],  0x0c),
    ]),
    ("pop", &[
        (&[Operand::Register], 0x03),
        (&[Operand::Address],  0x04),
    ]),
    ("dup", &[(&[], 0x05)]),

    ("mov", &[
        (&[Operand::Register, Operand::Number],   0x06),
        (&[Operand::Address,  Operand::Number],   0x07),
        (&[Operand::Register, Operand::Address],  0x08),
        (&[Operand::Address,  Operand::Register], 0x09),
        (&[Operand::Register, Operand::Register], 0x0a),
        (&[Operand::Address,  Operand::Address],  0x0b),
    ]),

    ("add", &[(&[Operand::Register, Operand::Register], 0x10), (&[], 0x11)]),
    ("sub", &[(&[Operand::Register, Operand::Register], 0x12), (&[], 0x13)]),
    ("mul", &[(&[Operand::Register, Operand::Register], 0x14), (&[], 0x15)]),
    ("div", &[(&[Operand::Register, Operand::Register], 0x16), (&[], 0x17)]),
    ("not", &[(&[Operand::Register], 0x18), (&[], 0x19)]),
    ("and", &[(&[Operand::Register, Operand::Register], 0x1a), (&[], 0x1b)]),
    ("or",  &[(&[Operand::Register, Operand::Register], 0x1c), (&[], 0x1d)]),
    ("xor", &[(&[Operand::Register, Operand::Register], 0x1e), (&[], 0x1f)]),

    ("jmp", &[(&[Operand::Number], 0x20)]),

    ("cmp", &[
        (&[Operand::Register, Operand::Register], 0x30),
        (&[Operand::Register, Operand::Number],   0x31),
        (&[Operand::Number],                      0x32),
    ]),
    ("je",  &[(&[Operand::Number], 0x33)]),
    ("jne", &[(&[Operand::Number], 0x34)]),
    ("jg",  &[(&[Operand::Number], 0x35)]),
    ("js",  &[(&[Operand::Number], 0x36)]),
    ("jo",  &[(&[Operand::Number], 0x37)]),

    ("frs", &[(&[], 0x40)]),

    ("inc", &[(&[Operand::Register], 0x50), (&[], 0x52)]),
    ("dec", &[(&[Operand::Register], 0x51), (&[], 0x53)]),

    ("call", &[(&[Operand::Number], 0x60)]),
    ("ret",  &[(&[], 0x61)]),
];

/// Tries to match `pattern` against the tokens starting at `pos`. On
/// success, returns the number of tokens consumed (including the comma
/// divider between two operands).
fn match_pattern(tokens: &[Token], pos: usize, pattern: Pattern) -> Option<usize> {
    match pattern {
        [] => Some(0),
        [a] => tokens.get(pos).filter(|t| a.matches(t)).map(|_| 1),
        [a, b] => {
            let a_tok = tokens.get(pos)?;
            let div = tokens.get(pos + 1)?;
            let b_tok = tokens.get(pos + 2)?;
            if a.matches(a_tok) && div.kind == TokenKind::Divider && b.matches(b_tok) {
                Some(3)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn emit_operand(bytes: &mut Vec<u8>, kind: Operand, token: &Token) {
    match kind {
        Operand::Register => bytes.push(register_index(&token.text)),
        Operand::Number | Operand::Address => {
            bytes.extend_from_slice(&(token.value as i32 as u32).to_be_bytes());
        }
    }
}

fn describe_row(mnemonic: &str, pattern: Pattern) -> String {
    if pattern.is_empty() {
        return format!("  - {}\n", mnemonic);
    }
    let operands: Vec<&str> = pattern.iter().map(|o| o.describe()).collect();
    format!("  - {} {}\n", mnemonic, operands.join(", "))
}

/// Encodes the resolved token stream into the code section byte vector.
///
/// Expects an `Opcode` token at every position where an instruction
/// begins; collects "expected opcode" and "unknown structure" diagnostics
/// across the whole stream before returning them, per `spec.md` §7.
pub fn encode(tokens: &[Token]) -> Result<Vec<u8>, Vec<Diagnostic>> {
    let mut bytes = Vec::new();
    let mut diagnostics = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let opcode_tok = &tokens[i];

        if opcode_tok.kind != TokenKind::Opcode {
            diagnostics.push(Diagnostic {
                text: format!(
                    "Expected opcode on line {} got {}: {}",
                    opcode_tok.line,
                    opcode_tok.kind,
                    opcode_tok.display_value(),
                ),
                loc: crate::util::Location::UNKNOWN,
                severity: crate::message::Severity::Error,
            });
            i += 1;
            continue;
        }

        let (_, rows) = ROWS
            .iter()
            .find(|(name, _)| *name == opcode_tok.text)
            .expect("resolver only classifies known mnemonics as Opcode");

        let mut matched = false;
        for (pattern, opcode) in *rows {
            if let Some(consumed) = match_pattern(tokens, i + 1, pattern) {
                bytes.push(*opcode);
                for (idx, kind) in pattern.iter().enumerate() {
                    let pos = i + 1 + idx * 2;
                    emit_operand(&mut bytes, *kind, &tokens[pos]);
                }
                i += 1 + consumed;
                matched = true;
                break;
            }
        }

        if !matched {
            let mut text = format!(
                "Unknown structure for '{}' mnemonic on line {}.\nExpected one of the following:\n",
                opcode_tok.text, opcode_tok.line,
            );
            for (pattern, _) in *rows {
                text.push_str(&describe_row(&opcode_tok.text, pattern));
            }
            diagnostics.push(Diagnostic {
                text,
                loc: crate::util::Location::UNKNOWN,
                severity: crate::message::Severity::Error,
            });
            i += 1;
        }
    }

    if diagnostics.is_empty() {
        Ok(bytes)
    } else {
        Err(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::extract;
    use crate::lexer::lex;
    use crate::resolver::resolve;

    fn encode_source(src: &str) -> Vec<u8> {
        let tokens = lex(src).unwrap();
        let (tokens, defs) = extract(tokens).unwrap();
        let (tokens, _) = resolve(tokens, &defs).unwrap();
        encode(&tokens).unwrap()
    }

    #[test]
    fn minimal_halt() {
        assert_eq!(encode_source("stp"), vec![0x00]);
    }

    #[test]
    fn immediate_push() {
        assert_eq!(encode_source("push 5"), vec![0x01, 0x00, 0x00, 0x00, 0x05]);
    }

    #[test]
    fn register_move() {
        assert_eq!(encode_source("mov a, b"), vec![0x0a, 0x00, 0x01]);
    }

    #[test]
    fn label_resolution() {
        let bytes = encode_source("jmp target\n:target\nstp");
        assert_eq!(bytes, vec![0x20, 0x00, 0x00, 0x00, 0x05, 0x00]);
    }

    #[test]
    fn optional_operand_falls_back_to_no_operand_form() {
        assert_eq!(encode_source("add"), vec![0x11]);
        assert_eq!(encode_source("add a, b"), vec![0x10, 0x00, 0x01]);
    }

    #[test]
    fn push_address_variant() {
        assert_eq!(encode_source("push &20"), vec![0x0c, 0x00, 0x00, 0x00, 0x14]);
    }

    #[test]
    fn cmp_number_only_form() {
        assert_eq!(encode_source("cmp 7"), vec![0x32, 0x00, 0x00, 0x00, 0x07]);
    }

    #[test]
    fn big_endian_immediate_bytes() {
        // 16909060 == 0x01020304
        let bytes = encode_source("push 16909060");
        assert_eq!(bytes, vec![0x01, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn unknown_structure_for_mandatory_operand_mnemonic_is_an_error() {
        let tokens = lex("mov a").unwrap();
        let (tokens, defs) = extract(tokens).unwrap();
        let (tokens, _) = resolve(tokens, &defs).unwrap();
        let err = encode(&tokens).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err[0].text.contains("Unknown structure for 'mov'"));
    }

    #[test]
    fn expected_opcode_error_names_kind_and_value() {
        let tokens = lex("5").unwrap();
        let (tokens, defs) = extract(tokens).unwrap();
        let (tokens, _) = resolve(tokens, &defs).unwrap();
        let err = encode(&tokens).unwrap_err();
        assert!(err[0].text.contains("Expected opcode"));
        assert!(err[0].text.contains("number: 5"));
    }
}
