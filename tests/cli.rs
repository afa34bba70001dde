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

//! Drives the `ccasm` binary itself: exit codes, `--output`, and
//! missing-file handling, per `spec.md` §6.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn assembles_to_derived_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("program.cca");
    fs::write(&input, "stp").unwrap();

    Command::cargo_bin("ccasm")
        .unwrap()
        .arg(&input)
        .arg("--silent")
        .current_dir(dir.path())
        .assert()
        .success();

    let output = dir.path().join("program.ccb");
    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes, vec![0x1D, 0x1D, 0x1D, 0x1D, 0x00]);
}

#[test]
fn honors_explicit_output_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("program.cca");
    let output = dir.path().join("custom.bin");
    fs::write(&input, "stp").unwrap();

    Command::cargo_bin("ccasm")
        .unwrap()
        .arg(&input)
        .args(["--output", output.to_str().unwrap()])
        .arg("--silent")
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn missing_input_file_exits_nonzero_with_an_error_message() {
    Command::cargo_bin("ccasm")
        .unwrap()
        .arg("/no/such/file.cca")
        .arg("--silent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR"));
}

#[test]
fn malformed_program_exits_nonzero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.cca");
    fs::write(&input, "jmp nowhere\nstp").unwrap();

    Command::cargo_bin("ccasm")
        .unwrap()
        .arg(&input)
        .arg("--silent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn silent_flag_suppresses_progress_messages() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("program.cca");
    fs::write(&input, "stp").unwrap();

    Command::cargo_bin("ccasm")
        .unwrap()
        .arg(&input)
        .arg("--silent")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn debug_flag_dumps_tokens_definitions_and_markers() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("program.cca");
    fs::write(&input, "def greeting \"hi\"\npush greeting\nstp").unwrap();

    Command::cargo_bin("ccasm")
        .unwrap()
        .arg(&input)
        .arg("--debug")
        .arg("--silent")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexical analyzer result"))
        .stdout(predicate::str::contains("Definitions found"));
}
