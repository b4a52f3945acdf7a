//! Ask for a new reflective question.

use crate::ai::prompts::build_prompt;
use crate::ai::QuestionGenerator;
use crate::errors::AppResult;
use crate::journal::{Mood, PersonaId, SessionState};
use tracing::{debug, info};

/// Generates a question for the given mood and persona and records it in the session.
///
/// # Flow
///
/// 1. Build the prompt from mood and persona
/// 2. Make one generation request
/// 3. On success, record the question (it becomes the current question and
///    heads the archive) and return it
///
/// On failure the session is left exactly as it was: the previous question stays
/// current and nothing is added to the archive.
///
/// # Errors
///
/// Returns `AppError::AI` with the underlying generation failure.
///
/// # Example
///
/// ```
/// use stillpoint::ai::QuestionGenerator;
/// use stillpoint::errors::AIError;
/// use stillpoint::journal::{Mood, PersonaId, SessionState};
/// use stillpoint::ops::ask_question;
///
/// struct Fixed;
/// impl QuestionGenerator for Fixed {
///     fn generate(&self, _prompt: &str) -> Result<String, AIError> {
///         Ok("What would you do if you were not afraid?".to_string())
///     }
/// }
///
/// let mut session = SessionState::new();
/// let question = ask_question(&mut session, &Fixed, Some(Mood::Clear), PersonaId::None)?;
/// assert_eq!(session.current_question(), question);
/// # Ok::<(), stillpoint::AppError>(())
/// ```
pub fn ask_question(
    session: &mut SessionState,
    generator: &dyn QuestionGenerator,
    mood: Option<Mood>,
    persona: PersonaId,
) -> AppResult<String> {
    info!(
        session_id = %session.id(),
        mood = mood.map(|m| m.as_str()).unwrap_or("none"),
        persona = persona.name(),
        "Generating question"
    );

    let prompt = build_prompt(mood, persona);
    let question = match generator.generate(&prompt) {
        Ok(question) => question,
        Err(e) => {
            debug!(session_id = %session.id(), "Question generation failed: {}", e);
            return Err(e.into());
        }
    };

    session.record_question(question.clone());
    info!(session_id = %session.id(), "Generated question");
    Ok(question)
}
