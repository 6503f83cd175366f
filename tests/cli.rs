//! Startup contract of the binary with piped stdin

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cmd-invader"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env("RUST_LOG", "off")
        .spawn()
        .expect("spawn cmd-invader");

    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("wait for cmd-invader")
}

#[test]
fn empty_input_fails() {
    let output = run_with_stdin(b"");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no frame should be drawn");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[Error] 'input' is empty."), "stderr: {stderr}");
}

#[test]
fn whitespace_only_input_fails() {
    let output = run_with_stdin(b"  \n\t\n\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
