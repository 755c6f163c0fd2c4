//! Inbound generation request and its validation rules.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Maximum accepted topic length in characters.
pub const MAX_TOPIC_CHARS: usize = 150;

/// Requested output length, mapped to an approximate word target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Parse the inbound string form.  Unrecognized values are an input
    /// error, not a silent default.
    pub fn parse(s: &str) -> Result<Self, GenerateError> {
        match s {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            other => Err(GenerateError::InvalidInput(format!(
                "unknown length '{other}': expected short, medium or long"
            ))),
        }
    }

    /// Approximate word budget communicated to the model.
    pub fn target_words(self) -> u32 {
        match self {
            Length::Short => 300,
            Length::Medium => 500,
            Length::Long => 800,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

/// A validated content-generation request.  Constructed fresh per inbound
/// call, never persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub platform: String,
    pub tone: String,
    pub topic: String,
    pub length: Length,
    pub keywords: Option<String>,
    pub style: Option<String>,
}

impl GenerationRequest {
    /// Validate the topic bound.  The composer assumes this has been run.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(GenerateError::InvalidInput("topic is required".into()));
        }
        if topic.chars().count() > MAX_TOPIC_CHARS {
            return Err(GenerateError::InvalidInput(format!(
                "topic too long (maximum {MAX_TOPIC_CHARS} characters)"
            )));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    fn request_with_topic(topic: &str) -> GenerationRequest {
        GenerationRequest {
            platform: "LinkedIn".into(),
            tone: "Professional".into(),
            topic: topic.into(),
            length: Length::Medium,
            keywords: None,
            style: None,
        }
    }

    #[test]
    fn topic_at_150_chars_is_accepted() {
        let req = request_with_topic(&"x".repeat(150));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn topic_at_151_chars_is_rejected() {
        let req = request_with_topic(&"x".repeat(151));
        assert!(matches!(
            req.validate(),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn whitespace_only_topic_is_rejected() {
        let req = request_with_topic("   \t ");
        assert!(matches!(
            req.validate(),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn length_parses_known_values() {
        assert_eq!(Length::parse("short").unwrap(), Length::Short);
        assert_eq!(Length::parse("medium").unwrap(), Length::Medium);
        assert_eq!(Length::parse("long").unwrap(), Length::Long);
    }

    #[test]
    fn unknown_length_is_invalid_input() {
        assert!(matches!(
            Length::parse("gigantic"),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn word_targets() {
        assert_eq!(Length::Short.target_words(), 300);
        assert_eq!(Length::Medium.target_words(), 500);
        assert_eq!(Length::Long.target_words(), 800);
    }
}
