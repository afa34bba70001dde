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

//! Binary image assembly: concatenates the escape-expanded data section,
//! the four-byte section separator, and the code section into one CCB
//! image.

use crate::definitions::Definition;

/// The four bytes separating the data section from the code section.
pub const SECTION_SEPARATOR: [u8; 4] = [0x1D, 0x1D, 0x1D, 0x1D];

/// Expands the escape sequences recognized in `def` string literals.
///
/// Unrecognized backslash sequences pass through unchanged — the source
/// grammar does not define escapes beyond this table (`spec.md` §4.5).
fn expand_escapes(raw: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.peek() {
            Some('n') => { out.push(b'\n'); chars.next(); }
            Some('t') => { out.push(b'\t'); chars.next(); }
            Some('\\') => { out.push(b'\\'); chars.next(); }
            Some('\'') => { out.push(b'\''); chars.next(); }
            Some('"') => { out.push(b'"'); chars.next(); }
            Some('a') => { out.push(0x07); chars.next(); }
            Some('b') => { out.push(0x08); chars.next(); }
            Some('e') => { out.push(0x1B); chars.next(); }
            Some('f') => { out.push(0x0C); chars.next(); }
            Some('r') => { out.push(b'\r'); chars.next(); }
            Some('v') => { out.push(0x0B); chars.next(); }
            _ => out.push(b'\\'),
        }
    }

    out
}

/// Builds the data section: each definition's value, escape-expanded, in
/// insertion order. Empty values contribute nothing.
pub fn build_data_section(definitions: &[Definition]) -> Vec<u8> {
    let mut data = Vec::new();
    for def in definitions {
        data.extend(expand_escapes(&def.raw_value));
    }
    data
}

/// Assembles the final CCB image: data section, separator, code section.
pub fn build_image(definitions: &[Definition], code: &[u8]) -> Vec<u8> {
    let mut image = build_data_section(definitions);
    image.extend_from_slice(&SECTION_SEPARATOR);
    image.extend_from_slice(code);
    image
}
