use stillpoint::ai::prompts::{build_prompt, BASE_INSTRUCTION};
use stillpoint::journal::{Mood, PersonaCatalog, PersonaId};

fn mood_choices() -> Vec<Option<Mood>> {
    std::iter::once(None)
        .chain(Mood::ALL.iter().copied().map(Some))
        .collect()
}

#[test]
fn test_build_prompt_is_deterministic() {
    for mood in mood_choices() {
        for &persona in PersonaCatalog::ids() {
            assert_eq!(build_prompt(mood, persona), build_prompt(mood, persona));
        }
    }
}

#[test]
fn test_no_mood_and_none_persona_yield_base_instruction() {
    assert_eq!(build_prompt(None, PersonaId::None), BASE_INSTRUCTION);
}

#[test]
fn test_restless_socrates_ordering() {
    let prompt = build_prompt(Some(Mood::Restless), PersonaId::Socrates);
    let voice = PersonaCatalog::voice_instruction(PersonaId::Socrates).unwrap();

    assert!(prompt.starts_with(BASE_INSTRUCTION));
    let rest = &prompt[BASE_INSTRUCTION.len()..];
    assert!(rest.starts_with(&format!(" {}", voice)));

    let after_voice = &rest[1 + voice.len()..];
    assert!(after_voice.contains("restless"));
    assert!(!after_voice.contains(voice));
}

#[test]
fn test_none_persona_never_appends_voice() {
    let voices: Vec<&str> = PersonaCatalog::ids()
        .iter()
        .filter_map(|&id| PersonaCatalog::voice_instruction(id))
        .collect();

    for mood in mood_choices() {
        let prompt = build_prompt(mood, PersonaId::None);
        assert!(prompt.starts_with(BASE_INSTRUCTION));
        for voice in &voices {
            assert!(!prompt.contains(voice));
        }
        if mood.is_none() {
            assert_eq!(prompt, BASE_INSTRUCTION);
        }
    }
}

#[test]
fn test_every_persona_fragment_is_appended_verbatim() {
    for persona in PersonaCatalog::all() {
        let prompt = build_prompt(None, persona.id);
        match persona.voice_instruction {
            Some(voice) => assert_eq!(prompt, format!("{} {}", BASE_INSTRUCTION, voice)),
            None => assert_eq!(prompt, BASE_INSTRUCTION),
        }
    }
}

#[test]
fn test_mood_clause_is_lowercase_for_every_mood() {
    for mood in Mood::ALL {
        let prompt = build_prompt(Some(mood), PersonaId::None);
        assert!(prompt.contains(&format!("feeling {}.", mood.as_lowercase())));
    }
}
