//! Response normalisation: map a successful upstream completion into the
//! service's stable output contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gateway::Completion;
use crate::request::GenerationRequest;

/// Topic is truncated to this many characters for display in metadata and
/// history entries.
pub const TOPIC_DISPLAY_CHARS: usize = 50;

/// Metadata accompanying a generated article.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleMetadata {
    pub platform: String,
    pub tone: String,
    pub topic: String,
    pub length: String,
    pub tokens_used: u32,
    pub timestamp: DateTime<Utc>,
    pub model: String,
    pub characters: usize,
}

/// The service's success payload.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArticle {
    pub article: String,
    pub metadata: ArticleMetadata,
}

/// Truncate a topic for display, on a character boundary.
pub fn display_topic(topic: &str) -> String {
    topic.trim().chars().take(TOPIC_DISPLAY_CHARS).collect()
}

/// Build the outbound payload from a completion.  Pure mapping: no network
/// or storage access.
pub fn normalize(completion: Completion, request: &GenerationRequest, model: &str) -> GeneratedArticle {
    let article = completion.text.trim().to_owned();
    let characters = article.chars().count();
    GeneratedArticle {
        metadata: ArticleMetadata {
            platform: request.platform.clone(),
            tone: request.tone.clone(),
            topic: display_topic(&request.topic),
            length: request.length.as_str().into(),
            tokens_used: completion.tokens_used,
            timestamp: Utc::now(),
            model: model.to_owned(),
            characters,
        },
        article,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::request::Length;

    fn request(topic: &str) -> GenerationRequest {
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
    fn article_text_is_trimmed() {
        let out = normalize(
            Completion {
                text: "  generated text \n".into(),
                tokens_used: 7,
            },
            &request("topic"),
            "m",
        );
        assert_eq!(out.article, "generated text");
        assert_eq!(out.metadata.characters, "generated text".chars().count());
    }

    #[test]
    fn long_topic_is_truncated_for_display() {
        let long = "t".repeat(120);
        let out = normalize(
            Completion {
                text: "x".into(),
                tokens_used: 1,
            },
            &request(&long),
            "m",
        );
        assert_eq!(out.metadata.topic.chars().count(), TOPIC_DISPLAY_CHARS);
    }

    #[test]
    fn metadata_echoes_request_fields() {
        let out = normalize(
            Completion {
                text: "x".into(),
                tokens_used: 42,
            },
            &request("topic"),
            "openai/gpt-4o-mini",
        );
        assert_eq!(out.metadata.platform, "LinkedIn");
        assert_eq!(out.metadata.tone, "Professional");
        assert_eq!(out.metadata.length, "medium");
        assert_eq!(out.metadata.tokens_used, 42);
        assert_eq!(out.metadata.model, "openai/gpt-4o-mini");
    }
}
