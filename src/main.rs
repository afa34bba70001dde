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

//! `ccasm` binary: argument parsing, file I/O, colored progress output, and
//! the rebuild-on-save watch loop around the pure `cca_asm` pipeline.

mod watch;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use cca_asm::assembler::{Assembler, Options};
use cca_asm::error::AssembleError;
use clap::Parser;
use colored::Colorize;

/// Two-pass assembler for the CCA virtual machine, producing CCB binary images.
#[derive(Parser, Debug)]
#[command(name = "ccasm", version, about)]
struct Cli {
    /// CCA assembly source file to assemble.
    input: PathBuf,

    /// Suppress progress messages.
    #[arg(short, long)]
    silent: bool,

    /// After each pass, dump tokens, definitions, and markers.
    #[arg(short, long)]
    debug: bool,

    /// Output path. Defaults to the input name truncated at the first '.',
    /// plus the suffix `.ccb`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reassemble whenever the input file changes.
    #[arg(short, long)]
    watch: bool,
}

/// Derives the output path per `spec.md` §6, when the caller did not
/// supply `--output` explicitly.
fn output_path(input: &PathBuf, explicit: &Option<PathBuf>) -> PathBuf {
    if let Some(out) = explicit {
        return out.clone();
    }
    let name = input.to_string_lossy();
    let stem = name.split('.').next().unwrap_or(&name);
    PathBuf::from(format!("{}.ccb", stem))
}

fn run(cli: &Cli) -> Result<(), AssembleError> {
    let out_path = output_path(&cli.input, &cli.output);
    let input_display = cli.input.display().to_string();

    if !cli.silent {
        println!("{} Parsing {}...\n", "[INFO]".green(), input_display.green());
    }

    let started = Instant::now();
    let options = Options { debug: cli.debug };
    let image = Assembler::new(options).assemble_file(&cli.input.to_string_lossy())?;

    if !cli.silent {
        println!(
            "{} Generating {}...\n",
            "[INFO]".green(),
            out_path.display().to_string().green()
        );
    }

    std::fs::write(&out_path, &image).map_err(|source| AssembleError::Io {
        path: out_path.clone(),
        source,
    })?;

    if !cli.silent {
        println!(
            "{} Successfully assembled {}, took {}ms\n",
            "[INFO]".green(),
            input_display.green(),
            started.elapsed().as_millis().to_string().green(),
        );
    }

    Ok(())
}

fn report(err: &AssembleError) {
    let diagnostics = err.diagnostics();
    if diagnostics.is_empty() {
        eprintln!("{} {}", "[ERROR]".red(), err);
    } else {
        for diagnostic in diagnostics {
            eprintln!("{} {}", "[ERROR]".red(), diagnostic);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.watch {
        let input = cli.input.clone();
        if let Err(e) = watch::watch(&input, || {
            if let Err(e) = run(&cli) {
                report(&e);
            }
        }) {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_defaults_to_stem_plus_ccb() {
        assert_eq!(
            output_path(&PathBuf::from("program.cca"), &None),
            PathBuf::from("program.ccb")
        );
    }

    #[test]
    fn output_path_truncates_at_first_dot() {
        assert_eq!(
            output_path(&PathBuf::from("program.v2.cca"), &None),
            PathBuf::from("program.ccb")
        );
    }

    #[test]
    fn output_path_honors_explicit_override() {
        assert_eq!(
            output_path(&PathBuf::from("program.cca"), &Some(PathBuf::from("out.bin"))),
            PathBuf::from("out.bin")
        );
    }
}
