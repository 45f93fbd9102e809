#![cfg(feature = "cli")]

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

const DEFAULT_TYPES: &str = "/etc/porttag/types";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/types")
}

fn porttag(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_porttag"));
    command.args(args).env_remove("PORTTAG_TYPES");
    command
}

fn encode(args: &[&str]) -> Output {
    let types = fixture();
    let mut command = porttag(&["encode"]);
    command
        .args(args)
        .arg("--types")
        .arg(&types)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn encode_token() {
    let output = encode(&["sw1", "eth1/2/3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "JlYlv&^}Zz\n");
}

#[test]
fn encode_legacy() {
    let output = encode(&["sw1", "eth1/2/3:4", "--legacy"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "8CCEC102512E003\n");
}

#[test]
fn types_from_environment() {
    let output = porttag(&["encode", "sw1", "eth1/2/3"])
        .env("PORTTAG_TYPES", fixture())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "JlYlv&^}Zz\n");
}

#[test]
fn default_types_path() {
    if Path::new(DEFAULT_TYPES).exists() {
        return;
    }

    let output = porttag(&["encode", "sw1", "eth1/2/3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains(DEFAULT_TYPES));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_table() {
    let output = porttag(&["encode", "sw1", "eth1/2/3", "--types", "fixtures/missing"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
}

#[test]
fn malformed_before_missing_table() {
    let output = porttag(&["encode", "sw1", "eth/2/3", "--types", "fixtures/missing"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("[eth]"));
}

#[test]
fn stage_exit_codes() {
    let cases = [
        ("fe1/2/3", 4),
        ("eth1-2-3", 5),
        ("eth/2/3", 5),
        ("eth1/2/3:9", 6),
    ];

    for (port, code) in cases {
        let output = encode(&["sw1", port]);
        assert_eq!(output.status.code(), Some(code), "{port}");
        assert!(stdout(&output).is_empty(), "{port}");
    }
}

#[test]
fn decode_fields() {
    let output = porttag(&["decode", "JlYlvvUbc["]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "checksum  8CCEC102\n\
         type      5\n\
         interface 1\n\
         module    2\n\
         port      3\n\
         split     4\n"
    );
}

#[test]
fn decode_without_split() {
    let output = porttag(&["decode", "JlYlv&^}Zz"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with("split     -\n"));
}

#[test]
fn decode_invalid_token() {
    for token in ["Hello", "Hello World", "#####00000"] {
        let output = porttag(&["decode", token]).output().unwrap();
        assert_eq!(output.status.code(), Some(7), "{token}");
    }
}

#[test]
fn usage_error() {
    let output = porttag(&["encode", "sw1"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
