//! The catalog of inspiring voices a question can be asked in.
//!
//! Personas form a closed set. Each one pairs a short descriptor, shown in the
//! persona selector, with a voice instruction appended to the generation prompt.
//! The `None` sentinel has no voice instruction.

use crate::errors::ParseSelectionError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a persona in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonaId {
    /// No persona: the base instruction is used on its own.
    None,
    Socrates,
    Rumi,
    MarcusAurelius,
    LaoTzu,
    MaryOliver,
    Rilke,
}

/// A persona as presented to the user and to the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub id: PersonaId,
    pub descriptor: &'static str,
    pub voice_instruction: Option<&'static str>,
}

const PERSONA_IDS: [PersonaId; 7] = [
    PersonaId::None,
    PersonaId::Socrates,
    PersonaId::Rumi,
    PersonaId::MarcusAurelius,
    PersonaId::LaoTzu,
    PersonaId::MaryOliver,
    PersonaId::Rilke,
];

impl PersonaId {
    /// Display name of the persona.
    pub fn name(&self) -> &'static str {
        match self {
            PersonaId::None => "None",
            PersonaId::Socrates => "Socrates",
            PersonaId::Rumi => "Rumi",
            PersonaId::MarcusAurelius => "Marcus Aurelius",
            PersonaId::LaoTzu => "Lao Tzu",
            PersonaId::MaryOliver => "Mary Oliver",
            PersonaId::Rilke => "Rilke",
        }
    }

    /// Parses a selector value where empty input means the `None` persona.
    ///
    /// # Errors
    ///
    /// Returns `ParseSelectionError::UnknownPersona` if the value is not recognised.
    pub fn parse_optional(s: &str) -> Result<PersonaId, ParseSelectionError> {
        if s.trim().is_empty() {
            return Ok(PersonaId::None);
        }
        s.parse()
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-cases and drops spaces, `-` and `_` so "marcus-aurelius" matches "Marcus Aurelius".
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for PersonaId {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        PERSONA_IDS
            .iter()
            .copied()
            .find(|id| normalize(id.name()) == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = PERSONA_IDS.iter().map(PersonaId::name).collect();
                ParseSelectionError::UnknownPersona {
                    input: s.trim().to_string(),
                    choices: names.join(", "),
                }
            })
    }
}

/// Static lookup over the closed set of personas.
///
/// # Examples
///
/// ```
/// use stillpoint::journal::{PersonaCatalog, PersonaId};
///
/// assert_eq!(PersonaCatalog::ids()[0], PersonaId::None);
/// assert!(PersonaCatalog::voice_instruction(PersonaId::None).is_none());
/// assert!(PersonaCatalog::voice_instruction(PersonaId::Socrates).is_some());
/// ```
pub struct PersonaCatalog;

impl PersonaCatalog {
    /// Persona ids in selector order, starting with the `None` sentinel.
    pub fn ids() -> &'static [PersonaId] {
        &PERSONA_IDS
    }

    /// Short descriptor shown next to the persona name.
    pub fn describe(id: PersonaId) -> &'static str {
        match id {
            PersonaId::None => "No particular voice",
            PersonaId::Socrates => "The questioning philosopher of Athens",
            PersonaId::Rumi => "The ecstatic Sufi poet of longing and union",
            PersonaId::MarcusAurelius => "The Stoic emperor writing notes to himself",
            PersonaId::LaoTzu => "The sage of the Tao, of yielding and emptiness",
            PersonaId::MaryOliver => "The poet of attention and the natural world",
            PersonaId::Rilke => "The poet of solitude and living the questions",
        }
    }

    /// Stylistic directive appended to the prompt, absent for `None`.
    pub fn voice_instruction(id: PersonaId) -> Option<&'static str> {
        match id {
            PersonaId::None => None,
            PersonaId::Socrates => Some(
                "Ask it in the voice of Socrates: plain-spoken and probing, \
                 exposing an assumption the reader did not know they held.",
            ),
            PersonaId::Rumi => Some(
                "Ask it in the voice of Rumi: tender and luminous, \
                 using an image of longing, wine, or the beloved to open the heart.",
            ),
            PersonaId::MarcusAurelius => Some(
                "Ask it in the voice of Marcus Aurelius: spare and steady, \
                 turning the reader toward what is within their control and what is not.",
            ),
            PersonaId::LaoTzu => Some(
                "Ask it in the voice of Lao Tzu: brief and paradoxical, \
                 favoring softness, stillness, and the usefulness of what is empty.",
            ),
            PersonaId::MaryOliver => Some(
                "Ask it in the voice of Mary Oliver: attentive to the living world, \
                 inviting the reader to notice something small and wild.",
            ),
            PersonaId::Rilke => Some(
                "Ask it in the voice of Rainer Maria Rilke: intimate and patient, \
                 encouraging the reader to live the question rather than rush the answer.",
            ),
        }
    }

    /// Full persona record for an id.
    pub fn get(id: PersonaId) -> Persona {
        Persona {
            id,
            descriptor: Self::describe(id),
            voice_instruction: Self::voice_instruction(id),
        }
    }

    /// Every persona, in selector order.
    pub fn all() -> impl Iterator<Item = Persona> {
        PERSONA_IDS.iter().copied().map(Self::get)
    }
}
