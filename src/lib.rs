/*!
# Still Point

Still Point is a reflective journaling companion. It asks a language model for one
reflective, open-ended question, optionally shaped by your current mood and by an
inspiring voice, and lets you journal your thoughts against that question.

## Core Features

- Ask for a question shaped by an optional mood and an optional persona
- Keep a newest-first archive of every question asked during the session
- Save journal entries linked to the question on display and the mood in effect
- Export the current question as plain text, or copy shareable text

Session state lives in memory for one run of the program and is discarded when
the session ends.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal`: Moods, personas, and per-session state
- `ai`: Prompt building and the chat completions client
- `ops`: Asking, exporting, and the interactive session loop

## Usage Example

```rust,no_run
use stillpoint::ai::QuestionService;
use stillpoint::journal::{Mood, PersonaId, SessionState};
use stillpoint::ops::ask_question;
use stillpoint::Config;

fn main() -> stillpoint::AppResult<()> {
    let config = Config::load()?;
    let service = QuestionService::from_config(&config)?;

    let mut session = SessionState::new();
    let question = ask_question(&mut session, &service, Some(Mood::Restless), PersonaId::Socrates)?;
    println!("{}", question);

    session.record_journal_entry("Sitting with it.", Some(Mood::Restless));
    session.end();
    Ok(())
}
```
*/

/// AI integration: prompt builder and chat completions client
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Moods, personas, and session state
pub mod journal;
/// High-level session operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{Mood, PersonaId, SessionState};
