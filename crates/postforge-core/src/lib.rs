//! postforge-core – the content-generation pipeline.
//!
//! Linear per-request flow:
//! validate → catalog lookup → prompt composition → upstream completion →
//! response normalisation.  All catalog data is immutable after startup and
//! each request's working data is local, so the pipeline needs no locks and
//! handles concurrent requests independently.

pub mod catalog;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod prompt;
pub mod request;

pub use catalog::{Catalog, PlatformConfig, ToneDirective};
pub use error::GenerateError;
pub use gateway::{Completion, CompletionGateway, GatewayConfig};
pub use normalize::{ArticleMetadata, GeneratedArticle};
pub use request::{GenerationRequest, Length, MAX_TOPIC_CHARS};

/// Run the full generation pipeline for one request.
///
/// Exactly one upstream call is made, and only after validation and
/// configuration checks pass.
pub async fn generate(
    catalog: &Catalog,
    gateway: &CompletionGateway,
    request: GenerationRequest,
) -> Result<GeneratedArticle, GenerateError> {
    request.validate()?;

    let platform = catalog.lookup_platform(&request.platform);
    let tone = catalog.lookup_tone(&request.tone);

    let prompt = prompt::compose(platform, tone, &request);
    let completion = gateway.complete(&prompt, platform, tone).await?;

    Ok(normalize::normalize(completion, &request, gateway.model()))
}
