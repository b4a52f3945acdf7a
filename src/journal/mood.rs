//! The closed set of moods a user can declare before asking for a question.

use crate::errors::ParseSelectionError;
use std::fmt;
use std::str::FromStr;

/// A user-declared emotional state.
///
/// "No mood selected" is represented as `Option::<Mood>::None` at every call site,
/// so this enum only carries real moods.
///
/// # Examples
///
/// ```
/// use stillpoint::journal::Mood;
///
/// let mood: Mood = "restless".parse().unwrap();
/// assert_eq!(mood, Mood::Restless);
/// assert_eq!(mood.to_string(), "Restless");
/// assert_eq!(mood.as_lowercase(), "restless");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Restless,
    Overwhelmed,
    Disconnected,
    Grateful,
    Clear,
}

impl Mood {
    /// All moods in selector order.
    pub const ALL: [Mood; 5] = [
        Mood::Restless,
        Mood::Overwhelmed,
        Mood::Disconnected,
        Mood::Grateful,
        Mood::Clear,
    ];

    /// Display name, as shown in the mood selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Restless => "Restless",
            Mood::Overwhelmed => "Overwhelmed",
            Mood::Disconnected => "Disconnected",
            Mood::Grateful => "Grateful",
            Mood::Clear => "Clear",
        }
    }

    /// Lower-cased name used inside prompts.
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            Mood::Restless => "restless",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Disconnected => "disconnected",
            Mood::Grateful => "grateful",
            Mood::Clear => "clear",
        }
    }

    /// Parses a selector value where empty input or `none` means "no mood".
    ///
    /// # Errors
    ///
    /// Returns `ParseSelectionError::UnknownMood` if the value is not recognised.
    pub fn parse_optional(s: &str) -> Result<Option<Mood>, ParseSelectionError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                let names: Vec<&str> = Mood::ALL.iter().map(Mood::as_str).collect();
                ParseSelectionError::UnknownMood {
                    input: trimmed.to_string(),
                    choices: names.join(", "),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GRATEFUL".parse::<Mood>().unwrap(), Mood::Grateful);
        assert_eq!(" clear ".parse::<Mood>().unwrap(), Mood::Clear);
    }

    #[test]
    fn test_parse_unknown_mood_lists_choices() {
        match "sleepy".parse::<Mood>() {
            Err(ParseSelectionError::UnknownMood { input, choices }) => {
                assert_eq!(input, "sleepy");
                assert!(choices.contains("Overwhelmed"));
            }
            other => panic!("Expected UnknownMood, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_optional_accepts_empty_and_none() {
        assert_eq!(Mood::parse_optional("").unwrap(), None);
        assert_eq!(Mood::parse_optional("None").unwrap(), None);
        assert_eq!(
            Mood::parse_optional("disconnected").unwrap(),
            Some(Mood::Disconnected)
        );
        assert!(Mood::parse_optional("elated").is_err());
    }

    #[test]
    fn test_lowercase_matches_display() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_lowercase(), mood.as_str().to_lowercase());
        }
    }
}
