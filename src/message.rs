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

//! Assembler diagnostics.
//!
//! A [`Diagnostic`] names where a problem happened (source line) and what
//! went wrong; [`crate::error::AssembleError`] groups diagnostics by the
//! pipeline stage that produced them.

use std::fmt::{self, Display, Formatter};
use crate::util::Location;

/// A single collected error, with its source origin attached.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diagnostic {
    /// Human-readable description of the problem.
    pub text: String,

    /// Line at which the problem was found, or [`Location::UNKNOWN`] for
    /// problems with no single source line (e.g. I/O failures).
    pub loc: Location,

    /// Severity of the problem.
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(line: u32, text: impl Into<String>) -> Self {
        Self { text: text.into(), loc: Location::new(line, 0), severity: Severity::Error }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        match self.loc {
            Location::UNKNOWN => write!(f, "{}", self.text),
            loc               => write!(f, "{} on line {}", self.text, loc),
        }
    }
}

/// Diagnostic severity levels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    /// For problems that prevent complete assembly.
    /// The stage collects all such problems, then the job aborts.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            Severity::Error => "error: ",
        })
    }
}
