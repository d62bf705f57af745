use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_msgpack"))
        .args(args)
        .output()
        .expect("failed to run msgpack binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn decode_prints_nested_value() {
    let output = run_cli(&["decode", "920102"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "[1, 2]");

    let output = run_cli(&["decode", "81a161c3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), r#"{"a": true}"#);
}

#[test]
fn decode_json_output() {
    let output = run_cli(&["decode", "--json", "82a162cc05a161c0"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), r#"{"b":5,"a":null}"#);
}

#[test]
fn decode_truncated_input_fails() {
    let output = run_cli(&["decode", "cd01"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to decode MessagePack"), "stderr: {}", err);
    assert!(err.contains("truncated uint16"), "stderr: {}", err);
}

#[test]
fn decode_empty_and_invalid_hex_fail() {
    let output = run_cli(&["decode", ""]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("empty MessagePack input"));

    let output = run_cli(&["decode", "9g"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid hex input"));
}

#[test]
fn decode_trailing_bytes() {
    let output = run_cli(&["decode", "01c0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1");

    let output = run_cli(&["decode", "--strict", "01c0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("trailing bytes"));
}

#[test]
fn decode_depth_limit_flag() {
    let output = run_cli(&["decode", "--max-depth", "1", "919101"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nesting depth exceeds maximum 1"));
}

#[test]
fn depth_flag_above_ceiling_rejected() {
    let output = run_cli(&["decode", "--max-depth", "1000000", "c0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid value"));

    let output = run_cli(&["encode", "json", "--max-depth", "1000000", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid value"));

    let output = run_cli(&["decode", "--max-depth", "512", "c0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "nil");
}

#[test]
fn encode_json_prints_lowercase_hex() {
    let output = run_cli(&["encode", "json", r#"{"a": true, "b": null}"#]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "82a161c3a162c0");

    let output = run_cli(&["encode", "json", "[1.5]"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "91cb3ff8000000000000");
}

#[test]
fn encode_json_integer_mode() {
    let output = run_cli(&["encode", "json", "--integers", "[1, -1, 300]"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "9301ffd20000012c");

    let output = run_cli(&["encode", "json", "--integers", "--", "-5"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "fb");
}

#[test]
fn encode_invalid_json_fails() {
    let output = run_cli(&["encode", "json", "{"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to encode JSON"), "stderr: {}", err);
    assert!(err.contains("invalid JSON"), "stderr: {}", err);
}

#[test]
fn encode_then_decode() {
    let encoded = run_cli(&["encode", "json", r#"{"list": [true, "x"], "n": null}"#]);
    assert!(encoded.status.success());
    let hex = stdout(&encoded);

    let decoded = run_cli(&["decode", &hex]);
    assert!(decoded.status.success());
    assert_eq!(stdout(&decoded), r#"{"list": [true, "x"], "n": nil}"#);
}
