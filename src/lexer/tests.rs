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

use super::lex;
use crate::token::TokenKind;

#[test]
fn register_move_offsets() {
    let tokens = lex("mov a, b").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "mov");
    assert_eq!(tokens[0].offset, 0);

    assert_eq!(tokens[1].text, "a");
    assert_eq!(tokens[1].offset, 1);

    assert_eq!(tokens[2].kind, TokenKind::Divider);
    assert_eq!(tokens[2].offset, 2);

    assert_eq!(tokens[3].text, "b");
    assert_eq!(tokens[3].offset, 2);
}

#[test]
fn unresolved_identifier_contributes_four_bytes() {
    let tokens = lex("jmp target\n:target\nstp").unwrap();
    // jmp (1) + target (4) = 5
    let marker = tokens.iter().find(|t| t.kind == TokenKind::Marker).unwrap();
    assert_eq!(marker.offset, 5);
}

#[test]
fn def_name_and_def_keyword_contribute_nothing() {
    let tokens = lex("def greeting \"hi\"\npush greeting\nstp").unwrap();
    // def(0) greeting(0) "hi"(0) push(1) greeting(4) stp -> greeting ref offset=1
    let push = tokens.iter().find(|t| t.text == "push").unwrap();
    assert_eq!(push.offset, 0);
    let greeting_ref = tokens.iter().rev().find(|t| t.text == "greeting").unwrap();
    assert_eq!(greeting_ref.offset, 1);
}

#[test]
fn comments_are_skipped_and_emit_no_tokens() {
    let tokens = lex("; a comment\nstp").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn comment_followed_by_newline_lands_next_token_on_the_right_line() {
    let tokens = lex("stp\n; a comment\nstp").unwrap();
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn number_literal_bases() {
    let tokens = lex("push 0b101\npush 0o17\npush 10").unwrap();
    let pushes: Vec<_> = tokens.iter().filter(|t| t.kind == TokenKind::Number).collect();
    assert_eq!(pushes[0].value, 5);
    assert_eq!(pushes[1].value, 15);
    assert_eq!(pushes[2].value, 10);
}

#[test]
fn address_operand() {
    let tokens = lex("pop &20").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Address);
    assert_eq!(tokens[1].value, 20);
}

#[test]
fn string_literal_raw_no_escape_expansion() {
    let tokens = lex("def nl \"a\\nb\"").unwrap();
    let s = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
    assert_eq!(s.text, "a\\nb");
}

#[test]
fn unexpected_symbol_is_collected_not_fatal_immediately() {
    let err = lex("mov a, @\nmov b, #").unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err[0].loc.line, 1);
    assert_eq!(err[1].loc.line, 2);
}

#[test]
fn empty_source_yields_no_tokens() {
    assert_eq!(lex("").unwrap(), vec![]);
}
