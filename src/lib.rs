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

//! `cca_asm`: a two-pass assembler for the CCA virtual machine.
//!
//! The pipeline — [`lexer`] → [`definitions`] → [`resolver`] → [`encoder`]
//! → [`writer`] — is exposed as a pure function of source text through
//! [`assembler::Assembler`]. Argument parsing, colored console output, and
//! the file-watch loop are the `ccasm` binary's concern, not this crate's.

pub mod assembler;
pub mod definitions;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod message;
pub mod resolver;
pub mod token;
pub mod util;
pub mod vocabulary;
pub mod writer;

pub use assembler::{Assembler, Options};
pub use error::AssembleError;
