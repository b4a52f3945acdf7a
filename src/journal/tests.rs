use crate::journal::{Mood, SessionState};
use chrono::{Local, TimeZone};

fn at(day: u32, hour: u32) -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, day, hour, 0, 0)
        .single()
        .expect("unambiguous local time")
}

#[test]
fn test_new_session_is_empty() {
    let session = SessionState::new();
    assert_eq!(session.current_question(), "");
    assert!(!session.has_question());
    assert!(session.archive().is_empty());
    assert!(session.journal().is_empty());
}

#[test]
fn test_archive_is_newest_first() {
    let mut session = SessionState::new();
    for i in 1..=5 {
        session.record_question(format!("Q{}", i));
    }

    assert_eq!(session.archive().len(), 5);
    assert_eq!(session.archive()[0].text, "Q5");
    assert_eq!(session.archive()[4].text, "Q1");
    assert_eq!(session.current_question(), "Q5");
}

#[test]
fn test_journal_entry_captures_question_and_mood_at_save_time() {
    let mut session = SessionState::new();
    session.record_question("Q1");
    session.record_journal_entry("thoughts", Some(Mood::Grateful));
    session.record_question("Q2");

    let entry = &session.journal()[0];
    assert_eq!(entry.linked_question, "Q1");
    assert_eq!(entry.mood, Some(Mood::Grateful));
    assert_eq!(entry.text, "thoughts");
}

#[test]
fn test_blank_entry_without_question_is_accepted() {
    let mut session = SessionState::new();
    session.record_journal_entry("", None);

    assert_eq!(session.journal().len(), 1);
    assert_eq!(session.journal()[0].text, "");
    assert_eq!(session.journal()[0].linked_question, "");
    assert_eq!(session.journal()[0].mood, None);
}

#[test]
fn test_display_helpers_use_iso_date() {
    let mut session = SessionState::new();
    session.record_question_at("Where does your attention rest?", at(9, 10));
    session.record_journal_entry_at("On the kettle.", Some(Mood::Clear), at(9, 11));
    session.record_journal_entry_at("Nowhere.", None, at(10, 8));

    assert_eq!(
        session.archive()[0].archive_line(),
        "2024-03-09: Where does your attention rest?"
    );
    assert_eq!(session.journal()[0].label(), "2024-03-10");
    assert_eq!(session.journal()[1].label(), "2024-03-09 (Clear)");
}

#[test]
fn test_end_reports_counts() {
    let mut session = SessionState::new();
    let id = session.id();
    session.record_question("Q1");
    session.record_question("Q2");
    session.record_journal_entry("a", None);

    let summary = session.end();
    assert_eq!(summary.id, id);
    assert_eq!(summary.questions, 2);
    assert_eq!(summary.entries, 1);
    assert!(summary.duration < std::time::Duration::from_secs(60));
}
