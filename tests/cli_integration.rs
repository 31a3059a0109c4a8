// End-to-end tests driving the textkit binary

use serde_json::Value;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::fixtures::{DOCUMENT_EXPECTED, DOCUMENT_TEXT};
use test_utils::{run_textkit, TestFixture};

#[test]
fn test_analyze_file_json_output() {
    let fixture = TestFixture::new();
    let path = fixture.create_text_file("doc.txt", DOCUMENT_TEXT);

    let output = run_textkit(&["analyze", path.to_str().unwrap(), "--format", "json"], "");
    assert!(output.status.success(), "textkit failed: {}", String::from_utf8_lossy(&output.stderr));

    let report: Value = serde_json::from_slice(&output.stdout).expect("Failed to parse JSON");
    let (words, characters, sentences, paragraphs) = DOCUMENT_EXPECTED;
    assert_eq!(report["statistics"]["words"], words);
    assert_eq!(report["statistics"]["characters"], characters);
    assert_eq!(report["statistics"]["sentences"], sentences);
    assert_eq!(report["statistics"]["paragraphs"], paragraphs);
    assert_eq!(report["palindrome"], false);
    assert_eq!(report["emails"], serde_json::json!(["team@example.com"]));
    assert_eq!(report["urls"], serde_json::json!(["https://example.com/docs,"]));
}

#[test]
fn test_analyze_stdin_text_output() {
    let output = run_textkit(&["analyze"], "Was it a car or a cat I saw?");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("   Words: 9\n"));
    assert!(stdout.contains("Palindrome: true\n"));
    assert!(stdout.contains("   Emails found: 0\n"));
}

#[test]
fn test_analyze_missing_file_fails() {
    let fixture = TestFixture::new();
    let missing = fixture.root_path.join("missing.txt");

    let output = run_textkit(&["analyze", missing.to_str().unwrap()], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read input file"));
}

#[test]
fn test_analyze_directory_is_rejected() {
    let fixture = TestFixture::new();
    let output = run_textkit(&["analyze", fixture.root_path.to_str().unwrap()], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input path is a directory"));
}

#[test]
fn test_demo_without_interactive_loop() {
    let output = run_textkit(&["demo", "--no-interactive"], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== textkit demo ==="));
    assert!(stdout.contains("7. URL extraction:"));
    assert!(!stdout.contains("Enter text to analyze"));
}

#[test]
fn test_default_command_runs_demo_then_session() {
    let output = run_textkit(&[], "racecar\nexit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. Text analysis:"));
    assert!(stdout.contains("'racecar' is a palindrome!"));
    assert!(stdout.contains("Thanks for using textkit!"));
}

#[test]
fn test_interactive_custom_exit_word() {
    let output = run_textkit(&["interactive", "--exit-word", "stop"], "noon\nstop\nabc\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'noon' is a palindrome!"));
    assert_eq!(stdout.matches("Words:").count(), 1);
}
