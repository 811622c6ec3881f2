use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Each test runs in its own temp dir so a stray .casefmt.toml can't leak in.
fn casefmt() -> (Command, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("casefmt").unwrap();
    cmd.current_dir(dir.path());
    (cmd, dir)
}

#[test]
fn default_style_is_camel() {
    let (mut cmd, _dir) = casefmt();
    cmd.arg("hello world")
        .assert()
        .success()
        .stdout(predicate::eq("helloWorld\n"));
}

#[test]
fn kebab_style_trims_and_collapses() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["--style", "kebab", "  Hello__World--again  "])
        .assert()
        .success()
        .stdout(predicate::eq("hello-world-again\n"));
}

#[test]
fn dot_style_lowercases_tokens() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["--style", "dot", " multiple words_here-now "])
        .assert()
        .success()
        .stdout(predicate::eq("multiple.words.here.now\n"));
}

#[test]
fn multiple_inputs_convert_in_order() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["--style", "kebab", "Hello World", "foo_bar"])
        .assert()
        .success()
        .stdout(predicate::eq("hello-world\nfoo-bar\n"));
}

#[test]
fn reads_stdin_lines_when_no_inputs() {
    let (mut cmd, _dir) = casefmt();
    cmd.write_stdin("hello world\nfoo_bar baz\n")
        .assert()
        .success()
        .stdout(predicate::eq("helloWorld\nfooBarBaz\n"));
}

#[test]
fn converts_lines_from_file() {
    let (mut cmd, dir) = casefmt();
    let path = dir.path().join("names.txt");
    fs::write(&path, "Hello World\n\nsome_other name\n").unwrap();

    cmd.args(["--style", "kebab", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("hello-world\nsome-other-name\n"));
}

#[test]
fn json_output_lists_conversions() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["-o", "json", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"style\": \"camelCase\""))
        .stdout(predicate::str::contains("\"input\": \"hello world\""))
        .stdout(predicate::str::contains("\"output\": \"helloWorld\""));
}

#[test]
fn json_input_converts_string_elements() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["--style", "dot", "--json-input"])
        .write_stdin("[\"Hello World\", \"foo_bar\"]")
        .assert()
        .success()
        .stdout(predicate::eq("hello.world\nfoo.bar\n"));
}

#[test]
fn json_input_rejects_non_string_elements() {
    let (mut cmd, _dir) = casefmt();
    cmd.arg("--json-input")
        .write_stdin("[\"ok\", 42]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input must be a string (received: number)"));
}

#[test]
fn json_input_rejects_null_elements() {
    let (mut cmd, _dir) = casefmt();
    cmd.arg("--json-input")
        .write_stdin("[null]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("received: null"));
}

#[test]
fn local_config_sets_default_style() {
    let (mut cmd, dir) = casefmt();
    fs::write(dir.path().join(".casefmt.toml"), "style = \"dot\"\n").unwrap();

    cmd.arg("hello world")
        .assert()
        .success()
        .stdout(predicate::eq("hello.world\n"));
}

#[test]
fn cli_style_overrides_local_config() {
    let (mut cmd, dir) = casefmt();
    fs::write(dir.path().join(".casefmt.toml"), "style = \"dot\"\n").unwrap();

    cmd.args(["--style", "kebab", "hello world"])
        .assert()
        .success()
        .stdout(predicate::eq("hello-world\n"));
}

#[test]
fn unknown_style_is_an_error() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["--style", "snake", "hello world"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case style"));
}

#[test]
fn empty_input_produces_empty_output_line() {
    let (mut cmd, _dir) = casefmt();
    cmd.args(["--style", "kebab", "  -_- "])
        .assert()
        .success()
        .stdout(predicate::eq("\n"));
}
