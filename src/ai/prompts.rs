//! System prompt and prompt builder for question generation.
//!
//! The user prompt is assembled in a fixed order: base instruction, then the
//! persona's voice instruction (if any), then the mood clause (if any). The
//! result depends only on its inputs.

use super::openai::Message;
use crate::journal::{Mood, PersonaCatalog, PersonaId};

/// System prompt sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are a quiet and timeless muse. \
Respond only with a single thought-provoking question, with no preamble.";

/// Instruction every prompt starts with.
pub const BASE_INSTRUCTION: &str = "Generate a single, reflective question that draws on deep philosophical and spiritual insight. \
Draw from the tone and wisdom found in ancient contemplative texts, the kind that offer paradox, poetic depth, and moral clarity. \
Let your question echo the spirit of writings that explore suffering, justice, love, awe, and the mystery of existence. \
The question should reframe how one thinks about life, love, purpose, or happiness amid complexity and responsibility. \
It should feel timeless, quiet, and expansive, without referencing any specific traditions or teachers. \
Assume the person reading it is thoughtful, driven, and often lives in their head. Your goal is to disrupt that gently.";

/// Builds the user prompt for one question.
///
/// # Examples
///
/// ```
/// use stillpoint::ai::prompts::{build_prompt, BASE_INSTRUCTION};
/// use stillpoint::journal::{Mood, PersonaId};
///
/// assert_eq!(build_prompt(None, PersonaId::None), BASE_INSTRUCTION);
///
/// let prompt = build_prompt(Some(Mood::Restless), PersonaId::Socrates);
/// assert!(prompt.starts_with(BASE_INSTRUCTION));
/// assert!(prompt.contains("restless"));
/// ```
pub fn build_prompt(mood: Option<Mood>, persona: PersonaId) -> String {
    let mut prompt = String::from(BASE_INSTRUCTION);

    if let Some(voice) = PersonaCatalog::voice_instruction(persona) {
        prompt.push(' ');
        prompt.push_str(voice);
    }

    if let Some(mood) = mood {
        prompt.push_str(&mood_clause(mood));
    }

    prompt
}

fn mood_clause(mood: Mood) -> String {
    format!(
        " The person is currently feeling {}. Let the question gently acknowledge or respond to that state.",
        mood.as_lowercase()
    )
}

/// Builds the system and user messages for one generation request.
pub fn question_messages(prompt: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_mood_no_persona_is_base_instruction() {
        assert_eq!(build_prompt(None, PersonaId::None), BASE_INSTRUCTION);
    }

    #[test]
    fn test_persona_fragment_precedes_mood_clause() {
        let prompt = build_prompt(Some(Mood::Restless), PersonaId::Socrates);
        let voice = PersonaCatalog::voice_instruction(PersonaId::Socrates).unwrap();

        let voice_at = prompt.find(voice).expect("voice fragment present");
        let mood_at = prompt.find("restless").expect("mood clause present");
        assert!(voice_at >= BASE_INSTRUCTION.len());
        assert!(voice_at < mood_at);
        assert_eq!(
            prompt,
            format!("{} {}{}", BASE_INSTRUCTION, voice, mood_clause(Mood::Restless))
        );
    }

    #[test]
    fn test_mood_is_lowercased() {
        let prompt = build_prompt(Some(Mood::Overwhelmed), PersonaId::None);
        assert!(prompt.contains("feeling overwhelmed."));
        assert!(!prompt.contains("Overwhelmed"));
    }

    #[test]
    fn test_question_messages_structure() {
        let messages = question_messages("Ask me something");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Ask me something");
    }

    #[test]
    fn test_system_prompt_asks_for_a_single_question() {
        assert!(SYSTEM_PROMPT.contains("single thought-provoking question"));
        assert!(SYSTEM_PROMPT.contains("no preamble"));
    }
}
