// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn reads_final_text_file_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("final.txt");
    std::fs::write(&path, "the answer").unwrap();

    let text = compute_final_text(Some(&path), None, "ignored stdout").unwrap();
    assert_eq!(text, "the answer");
}

#[test]
fn missing_final_text_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = compute_final_text(Some(&path), None, "").unwrap_err();
    assert!(matches!(err, crate::error::RuntimeError::FinalTextFile { .. }));
}

#[test]
fn falls_back_to_trimmed_stdout_with_no_file_and_no_parser() {
    let text = compute_final_text(None, None, "  hello world  \n").unwrap();
    assert_eq!(text, "hello world");
}

#[test]
fn unregistered_parser_name_falls_back_to_trimmed_stdout() {
    let text = compute_final_text(None, Some("nonexistent_parser"), "  raw  ").unwrap();
    assert_eq!(text, "raw");
}

#[test]
fn registered_parser_is_dispatched_by_name() {
    fn upper(stdout: &str) -> String {
        stdout.trim().to_uppercase()
    }
    register("test_upper_parser", upper);

    let text = compute_final_text(None, Some("test_upper_parser"), "shout this").unwrap();
    assert_eq!(text, "SHOUT THIS");
}

#[test]
fn final_text_file_takes_priority_over_parser() {
    fn marker(_stdout: &str) -> String {
        "from parser".to_string()
    }
    register("test_priority_parser", marker);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("final.txt");
    std::fs::write(&path, "from file").unwrap();

    let text = compute_final_text(Some(&path), Some("test_priority_parser"), "stdout").unwrap();
    assert_eq!(text, "from file");
}
