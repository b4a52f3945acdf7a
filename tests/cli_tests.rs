use predicates::prelude::*;
use serial_test::serial;
use tempfile::tempdir;

use test_helpers::{base_stillpoint_command, completion_body, stillpoint_command_for};

#[test]
fn test_cli_missing_api_key_aborts_startup() {
    let mut cmd = base_stillpoint_command();
    cmd.arg("--once");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_cli_list_personas_needs_no_credential() {
    let mut cmd = base_stillpoint_command();
    cmd.arg("--list-personas");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Socrates"))
        .stdout(predicate::str::contains("Marcus Aurelius"))
        .stdout(predicate::str::contains("None"));
}

#[test]
fn test_cli_invalid_mood() {
    let mut cmd = base_stillpoint_command();
    cmd.arg("--mood").arg("sleepy");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mood"));
}

#[test]
fn test_cli_invalid_persona() {
    let mut cmd = base_stillpoint_command();
    cmd.arg("--persona").arg("Plato");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown persona"));
}

#[test]
#[serial]
fn test_cli_once_prints_generated_question() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test-key")
        .match_body(mockito::Matcher::Regex("feeling grateful".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("  What have you received without asking?\n"))
        .create();

    let mut cmd = stillpoint_command_for(&server.url());
    cmd.args(["--once", "--mood", "Grateful", "--persona", "rumi"]);

    cmd.assert()
        .success()
        .stdout("What have you received without asking?\n");

    mock.assert();
}

#[test]
#[serial]
fn test_cli_once_reports_generation_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .create();

    let mut cmd = stillpoint_command_for(&server.url());
    cmd.arg("--once");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("rejected the API key"));

    mock.assert();
}

#[test]
#[serial]
fn test_cli_once_logs_generation_failure_once() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream overloaded")
        .create();

    let mut cmd = stillpoint_command_for(&server.url());
    cmd.args(["--once", "--log-level", "warn"]);

    let output = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr.matches("Application error").count(), 1);
    assert!(!stderr.contains("WARN"));
    assert!(!stderr.contains("Question generation failed"));
}

#[test]
#[serial]
fn test_cli_interactive_session_flow() {
    let export_dir = tempdir().unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("What is asking to be noticed?"))
        .expect(1)
        .create();

    let mut cmd = stillpoint_command_for(&server.url());
    cmd.arg("--export-dir")
        .arg(export_dir.path())
        .write_stdin("mood restless\nask\njournal The wind, mostly.\njournals\nexport\nquit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("❓ What is asking to be noticed?"))
        .stdout(predicate::str::contains("(Restless)"))
        .stdout(predicate::str::contains("Question: What is asking to be noticed?"))
        .stdout(predicate::str::contains("Entry: The wind, mostly."))
        .stdout(predicate::str::contains("reflection.txt"));

    mock.assert();
    let exported = std::fs::read_to_string(export_dir.path().join("reflection.txt")).unwrap();
    assert_eq!(exported, "What is asking to be noticed?");
}

#[test]
fn test_cli_invalid_log_format() {
    let mut cmd = base_stillpoint_command();
    cmd.args(["--list-personas", "--log-format", "xml"]);

    cmd.assert().failure();
}
