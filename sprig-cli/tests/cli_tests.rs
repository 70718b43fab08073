//! End-to-end tests for the `sprig` binary.

use std::process::{Command, Output};

/// Helper to run the binary with the given arguments.
fn sprig(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sprig"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_prints_tree_for_inline_markup() {
    let output = sprig(&["--html", r#"<a x="1">hi<b>yo</b></a>"#]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<a>  x=\"1\"  \n\thi\n\t<b>  \n\t\tyo\n"
    );
}

#[test]
fn test_json_output() {
    let output = sprig(&["--json", "--html", "<p>text</p>"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"name\": \"root\""));
    assert!(stdout.contains("\"inner_text\": \"text\""));
}

#[test]
fn test_parse_error_exits_non_zero() {
    let output = sprig(&["--html", "</a>"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("closing tag without a matching open element at byte 0"));
}

#[test]
fn test_keep_partial_prints_parsed_prefix() {
    let output = sprig(&["--keep-partial", "--html", "<a>x</a></b>"]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "<a>  \n\tx\n");
}

#[test]
fn test_missing_file_is_reported() {
    let output = sprig(&["this-file-does-not-exist.html"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read"));
}
