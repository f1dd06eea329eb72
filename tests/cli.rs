//! Integration tests for the to-nes-disasm CLI.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_to-nes-disasm"))
}

fn create_temp_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run to-nes-disasm");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

const SAMPLE: &str = "\
$8000: LDA #$01       (A901)
$8002: RTS            (60)
$8003:                (EA)
";

const SAMPLE_OUT: &str = "\
$8000\tA901  \tLDA #$01
$8002\t60   \tRTS 
$8003\tEA  \t.byte $EA
";

#[test]
fn stdin_keeps_only_matching_lines() {
    let output = run_with_stdin(&[], "$8000: LDA #$01 (A9 01)\nnot a matching line at all\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "$8000\tA901  \tLDA #$01\n"
    );
}

#[test]
fn reads_named_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "prg.da", SAMPLE);

    let output = Command::new(binary_path())
        .arg(&source)
        .output()
        .expect("failed to run to-nes-disasm");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_OUT);
}

#[test]
fn concatenates_files_and_stdin_in_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let first = create_temp_file(temp_dir.path(), "a.da", "$8002: RTS (60)\n");
    let second = create_temp_file(temp_dir.path(), "b.da", "junk\n$8003:  (EA)\n");

    let output = run_with_stdin(
        &[
            first.to_str().unwrap(),
            "-",
            second.to_str().unwrap(),
        ],
        "$8000: LDA #$01 (A901)\n",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "$8002\t60   \tRTS \n$8000\tA901  \tLDA #$01\n$8003\tEA  \t.byte $EA\n"
    );
}

#[test]
fn missing_file_exits_nonzero_after_earlier_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let first = create_temp_file(temp_dir.path(), "a.da", "$8002: RTS (60)\n");
    let missing = temp_dir.path().join("missing.da");

    let output = Command::new(binary_path())
        .args([first.to_str().unwrap(), missing.to_str().unwrap()])
        .output()
        .expect("failed to run to-nes-disasm");

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "$8002\t60   \tRTS \n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.da"), "stderr: {stderr}");
}

#[test]
fn output_is_deterministic() {
    let first = run_with_stdin(&[], SAMPLE);
    let second = run_with_stdin(&[], SAMPLE);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(first.stdout).unwrap(), SAMPLE_OUT);
}

#[test]
fn debug_flag_does_not_touch_stdout() {
    let output = run_with_stdin(&["--debug"], SAMPLE);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_OUT);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("3 emitted"), "stderr: {stderr}");
}
