//! Per-session state: the current question, the question archive, and journal entries.

use crate::constants::DATE_FORMAT_ISO;
use crate::journal::Mood;
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// A question produced by one successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl GeneratedQuestion {
    /// One line for the archive panel: `YYYY-MM-DD: question`.
    pub fn archive_line(&self) -> String {
        format!("{}: {}", self.timestamp.format(DATE_FORMAT_ISO), self.text)
    }
}

/// A reflection saved by the user, tied to the question shown when it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub text: String,
    pub timestamp: DateTime<Local>,
    /// Empty when no question had been generated yet.
    pub linked_question: String,
    pub mood: Option<Mood>,
}

impl JournalEntry {
    /// Heading for the journal panel: the date, followed by the mood if one was set.
    pub fn label(&self) -> String {
        let date = self.timestamp.format(DATE_FORMAT_ISO);
        match self.mood {
            Some(mood) => format!("{} ({})", date, mood),
            None => date.to_string(),
        }
    }
}

/// What a session produced, returned when the session is ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: Uuid,
    pub questions: usize,
    pub entries: usize,
    pub duration: Duration,
}

/// State owned by a single interactive session.
///
/// The archive and the journal only ever grow, and both are kept newest first.
/// Nothing here is persisted: the state is discarded by [`SessionState::end`].
///
/// # Examples
///
/// ```
/// use stillpoint::journal::{Mood, SessionState};
///
/// let mut session = SessionState::new();
/// session.record_question("What are you carrying that was never yours?");
/// session.record_journal_entry("My father's worry, mostly.", Some(Mood::Restless));
///
/// assert_eq!(session.archive().len(), 1);
/// assert_eq!(
///     session.journal()[0].linked_question,
///     "What are you carrying that was never yours?"
/// );
/// let summary = session.end();
/// assert_eq!(summary.entries, 1);
/// ```
#[derive(Debug)]
pub struct SessionState {
    id: Uuid,
    started_at: DateTime<Local>,
    current_question: String,
    archive: VecDeque<GeneratedQuestion>,
    journal: VecDeque<JournalEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Starts an empty session.
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Local::now(),
            current_question: String::new(),
            archive: VecDeque::new(),
            journal: VecDeque::new(),
        };
        debug!(session_id = %session.id, "Session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Makes `text` the current question and prepends it to the archive.
    pub fn record_question(&mut self, text: impl Into<String>) {
        self.record_question_at(text, Local::now());
    }

    /// Same as [`SessionState::record_question`] with an explicit timestamp.
    pub fn record_question_at(&mut self, text: impl Into<String>, timestamp: DateTime<Local>) {
        let text = text.into();
        self.current_question = text.clone();
        self.archive.push_front(GeneratedQuestion { text, timestamp });
        debug!(
            session_id = %self.id,
            archive_len = self.archive.len(),
            "Recorded generated question"
        );
    }

    /// Prepends a journal entry linked to the current question.
    ///
    /// Blank entries are accepted and stored as-is.
    pub fn record_journal_entry(&mut self, text: impl Into<String>, mood: Option<Mood>) {
        self.record_journal_entry_at(text, mood, Local::now());
    }

    /// Same as [`SessionState::record_journal_entry`] with an explicit timestamp.
    pub fn record_journal_entry_at(
        &mut self,
        text: impl Into<String>,
        mood: Option<Mood>,
        timestamp: DateTime<Local>,
    ) {
        self.journal.push_front(JournalEntry {
            text: text.into(),
            timestamp,
            linked_question: self.current_question.clone(),
            mood,
        });
        debug!(
            session_id = %self.id,
            journal_len = self.journal.len(),
            "Saved journal entry"
        );
    }

    /// The question currently on display; empty until the first generation.
    pub fn current_question(&self) -> &str {
        &self.current_question
    }

    pub fn has_question(&self) -> bool {
        !self.current_question.is_empty()
    }

    /// Generated questions, newest first.
    pub fn archive(&self) -> &VecDeque<GeneratedQuestion> {
        &self.archive
    }

    /// Journal entries, newest first.
    pub fn journal(&self) -> &VecDeque<JournalEntry> {
        &self.journal
    }

    /// Ends the session, discarding its state.
    pub fn end(self) -> SessionSummary {
        let duration = (Local::now() - self.started_at)
            .to_std()
            .unwrap_or_default();
        let summary = SessionSummary {
            id: self.id,
            questions: self.archive.len(),
            entries: self.journal.len(),
            duration,
        };
        info!(
            session_id = %summary.id,
            questions = summary.questions,
            entries = summary.entries,
            duration_secs = summary.duration.as_secs(),
            "Session ended"
        );
        summary
    }
}
