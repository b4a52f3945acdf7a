use std::fs;
use stillpoint::errors::AppError;
use stillpoint::journal::SessionState;
use stillpoint::ops::{export_question, share_text};
use tempfile::tempdir;

#[test]
fn test_export_writes_question_verbatim() {
    let dir = tempdir().unwrap();
    let mut session = SessionState::new();
    let question = "What would remain if you stopped explaining yourself?";
    session.record_question(question);

    let path = export_question(&session, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("reflection.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), question);
}

#[test]
fn test_export_overwrites_with_latest_question() {
    let dir = tempdir().unwrap();
    let mut session = SessionState::new();
    session.record_question("A much longer first question that fills the file?");
    export_question(&session, dir.path()).unwrap();

    session.record_question("Short?");
    let path = export_question(&session, dir.path()).unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "Short?");
}

#[test]
fn test_export_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("reflections").join("today");
    let mut session = SessionState::new();
    session.record_question("Where are you hurrying to?");

    let path = export_question(&session, &nested).unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_without_question_fails() {
    let dir = tempdir().unwrap();
    let session = SessionState::new();

    match export_question(&session, dir.path()) {
        Err(AppError::Session(message)) => assert!(message.contains("No question to export")),
        other => panic!("Expected Session error, got {:?}", other),
    }
    assert!(!dir.path().join("reflection.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_export_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let mut session = SessionState::new();
    session.record_question("Who is watching your thoughts?");

    let path = export_question(&session, dir.path()).unwrap();
    let mode = fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_share_text_format() {
    assert_eq!(
        share_text("Q?"),
        "Here's a reflective question I came across:\n\nQ?"
    );
}
