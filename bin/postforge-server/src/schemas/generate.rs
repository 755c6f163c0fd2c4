//! Request / response types for `POST /generate`.

use chrono::{DateTime, Utc};
use postforge_core::GeneratedArticle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Target platform; unknown or absent values fall back to LinkedIn.
    #[serde(default)]
    pub platform: Option<String>,
    /// Tone name; unknown or absent values fall back to Professional.
    #[serde(default)]
    pub tone: Option<String>,
    /// The subject to write about.  Required, 1–150 characters.
    #[serde(default)]
    pub topic: Option<String>,
    /// `"short"`, `"medium"` or `"long"`; defaults to medium.
    #[serde(default)]
    pub length: Option<String>,
    /// Keywords / hashtags to weave into the content.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Free-text writing style directive.
    #[serde(default)]
    pub style: Option<String>,
}

/// Metadata accompanying a generated article.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleMetadata {
    pub platform: String,
    pub tone: String,
    /// Topic truncated for display.
    pub topic: String,
    pub length: String,
    pub tokens_used: u32,
    pub timestamp: DateTime<Utc>,
    pub model: String,
    /// Character count of the generated article.
    pub characters: usize,
}

/// Response body for `POST /generate`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub article: String,
    pub metadata: ArticleMetadata,
}

impl From<GeneratedArticle> for GenerateResponse {
    fn from(value: GeneratedArticle) -> Self {
        Self {
            article: value.article,
            metadata: ArticleMetadata {
                platform: value.metadata.platform,
                tone: value.metadata.tone,
                topic: value.metadata.topic,
                length: value.metadata.length,
                tokens_used: value.metadata.tokens_used,
                timestamp: value.metadata.timestamp,
                model: value.metadata.model,
                characters: value.metadata.characters,
            },
        }
    }
}
