//! Interactive terminal session.
//!
//! The session loop is the user-interface surface of the application: it reads
//! one command per line, applies it to the session state, and renders the result.
//! Every command is handled to completion before the next line is read, so at
//! most one generation request is ever in flight.

use crate::ai::QuestionGenerator;
use crate::errors::AppResult;
use crate::journal::{Mood, PersonaCatalog, PersonaId, SessionState};
use crate::ops::ask::ask_question;
use crate::ops::export::{export_question, share_text};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Selections the session starts with.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub mood: Option<Mood>,
    pub persona: PersonaId,
    pub export_dir: PathBuf,
}

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Ask,
    SetMood(Option<Mood>),
    SetPersona(PersonaId),
    /// Journal text, kept verbatim (may be empty).
    Journal(String),
    Show,
    Export(Option<PathBuf>),
    Archive,
    Journals,
    Moods,
    Personas,
    Help,
    Quit,
}

impl SessionCommand {
    /// Command word, for logs. Never includes journal text.
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::Ask => "ask",
            SessionCommand::SetMood(_) => "mood",
            SessionCommand::SetPersona(_) => "persona",
            SessionCommand::Journal(_) => "journal",
            SessionCommand::Show => "show",
            SessionCommand::Export(_) => "export",
            SessionCommand::Archive => "archive",
            SessionCommand::Journals => "journals",
            SessionCommand::Moods => "moods",
            SessionCommand::Personas => "personas",
            SessionCommand::Help => "help",
            SessionCommand::Quit => "quit",
        }
    }
}

const HELP_TEXT: &str = "Commands:
  ask                 Ask me a question
  mood <name|none>    Set your current state
  persona <name|none> Choose an inspiring voice
  journal [text]      Save a journal entry for the current question
  show                Show the current question and shareable text
  export [dir]        Save the current question to reflection.txt
  archive             List every question asked this session
  journals            List your journal entries
  moods               List available moods
  personas            List available voices
  help                Show this help
  quit | exit         End the session";

/// Parses one line of input.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns a message for unknown commands or invalid mood/persona names.
///
/// # Examples
///
/// ```
/// use stillpoint::journal::{Mood, PersonaId};
/// use stillpoint::ops::interactive::{parse_command, SessionCommand};
///
/// assert_eq!(parse_command("ask").unwrap(), Some(SessionCommand::Ask));
/// assert_eq!(
///     parse_command("mood grateful").unwrap(),
///     Some(SessionCommand::SetMood(Some(Mood::Grateful)))
/// );
/// assert_eq!(
///     parse_command("persona lao tzu").unwrap(),
///     Some(SessionCommand::SetPersona(PersonaId::LaoTzu))
/// );
/// assert_eq!(
///     parse_command("journal  two spaces").unwrap(),
///     Some(SessionCommand::Journal(" two spaces".to_string()))
/// );
/// ```
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim_end_matches(&['\n', '\r'][..]);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "ask" => SessionCommand::Ask,
        "mood" => SessionCommand::SetMood(Mood::parse_optional(rest).map_err(|e| e.to_string())?),
        "persona" => {
            SessionCommand::SetPersona(PersonaId::parse_optional(rest).map_err(|e| e.to_string())?)
        }
        "journal" => SessionCommand::Journal(rest.to_string()),
        "show" => SessionCommand::Show,
        "export" => {
            let dir = rest.trim();
            SessionCommand::Export((!dir.is_empty()).then(|| PathBuf::from(dir)))
        }
        "archive" => SessionCommand::Archive,
        "journals" => SessionCommand::Journals,
        "moods" => SessionCommand::Moods,
        "personas" => SessionCommand::Personas,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command '{}'. Type 'help' to see what you can do",
                other
            ))
        }
    };

    Ok(Some(command))
}

/// Runs the interactive loop until `quit`, `exit`, or end of input.
///
/// A failed generation or export is reported on `output` and the loop goes on;
/// only I/O failures on `input`/`output` end the session with an error.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    session: &mut SessionState,
    generator: &dyn QuestionGenerator,
    options: SessionOptions,
) -> AppResult<()> {
    info!(session_id = %session.id(), "Starting interactive session");

    let SessionOptions {
        mut mood,
        mut persona,
        export_dir,
    } = options;

    writeln!(output, "\n🌀 The Still Point")?;
    writeln!(output, "One question. One shift.")?;
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(output, "{}", HELP_TEXT)?;
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n")?;
    render_selection(output, mood, persona)?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        debug!("Session command: {}", command.name());

        match command {
            SessionCommand::Ask => {
                writeln!(output, "…")?;
                match ask_question(session, generator, mood, persona) {
                    Ok(question) => writeln!(output, "\n❓ {}\n", question)?,
                    Err(e) => {
                        writeln!(output, "❌ Could not generate a question: {}", e)?;
                        if session.has_question() {
                            writeln!(output, "   Your last question: {}", session.current_question())?;
                        }
                    }
                }
            }
            SessionCommand::SetMood(new_mood) => {
                mood = new_mood;
                render_selection(output, mood, persona)?;
            }
            SessionCommand::SetPersona(new_persona) => {
                persona = new_persona;
                render_selection(output, mood, persona)?;
            }
            SessionCommand::Journal(text) => {
                session.record_journal_entry(text, mood);
                writeln!(output, "📝 Journal entry saved.")?;
            }
            SessionCommand::Show => {
                if session.has_question() {
                    writeln!(output, "\n❓ {}\n", session.current_question())?;
                    writeln!(output, "Shareable text:\n{}\n", share_text(session.current_question()))?;
                } else {
                    writeln!(output, "No question yet. Type 'ask' to receive one.")?;
                }
            }
            SessionCommand::Export(dir) => {
                let dir = dir.unwrap_or_else(|| export_dir.clone());
                match export_question(session, &dir) {
                    Ok(path) => writeln!(output, "📋 Saved to {}", path.display())?,
                    Err(e) => writeln!(output, "❌ {}", e)?,
                }
            }
            SessionCommand::Archive => render_archive(output, session)?,
            SessionCommand::Journals => render_journals(output, session)?,
            SessionCommand::Moods => {
                for m in Mood::ALL {
                    writeln!(output, "  {}", m)?;
                }
                writeln!(output, "  none")?;
            }
            SessionCommand::Personas => render_personas(output)?,
            SessionCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
            SessionCommand::Quit => {
                writeln!(output, "\n👋 Until next time.")?;
                break;
            }
        }
    }

    Ok(())
}

fn render_selection<W: Write>(output: &mut W, mood: Option<Mood>, persona: PersonaId) -> AppResult<()> {
    let mood = mood.map(|m| m.as_str()).unwrap_or("none");
    writeln!(output, "Mood: {} | Voice: {}", mood, persona)?;
    Ok(())
}

fn render_archive<W: Write>(output: &mut W, session: &SessionState) -> AppResult<()> {
    writeln!(output, "\n📚 Your Archive")?;
    if session.archive().is_empty() {
        writeln!(output, "  (empty)")?;
    }
    for question in session.archive() {
        writeln!(output, "- {}", question.archive_line())?;
    }
    Ok(())
}

fn render_journals<W: Write>(output: &mut W, session: &SessionState) -> AppResult<()> {
    writeln!(output, "\n📔 Your Journals")?;
    if session.journal().is_empty() {
        writeln!(output, "  (empty)")?;
    }
    for entry in session.journal() {
        writeln!(output, "▸ {}", entry.label())?;
        writeln!(output, "  Question: {}", entry.linked_question)?;
        writeln!(output, "  Entry: {}", entry.text)?;
    }
    Ok(())
}

/// Writes the persona catalog, one persona per line.
pub fn render_personas<W: Write>(output: &mut W) -> AppResult<()> {
    for persona in PersonaCatalog::all() {
        writeln!(output, "  {:<16} {}", persona.id.name(), persona.descriptor)?;
    }
    Ok(())
}
