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

use std::fmt::{self, Display, Formatter};

/// A source code location.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Location {
    /// The 1-based line number, or `0` to indicate an unknown line.
    pub line: u32,

    /// The 1-based column number, or `0` to indicate an unknown column.
    pub column: u32,
}

impl Location {
    pub const UNKNOWN: Self = Self::new(0, 0);
    pub const BOF:     Self = Self::new(1, 1);

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.line, self.column) {
            (0, 0) => Ok(()),
            (l, 0) => write!(f, "{}",    l   ),
            (l, c) => write!(f, "{}:{}", l, c),
        }
    }
}
