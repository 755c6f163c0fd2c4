//! Completion gateway: the single outbound call to the upstream
//! chat-completions provider.
//!
//! Exactly one HTTP request per invocation, bounded by the configured
//! timeout.  No retries, no streaming.  Every outcome is classified into one
//! [`GenerateError`] variant so the HTTP layer can map it to a stable status.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{PlatformConfig, ToneDirective};
use crate::error::GenerateError;

/// Default bound on the upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

/// Default upstream endpoint (OpenRouter, OpenAI-compatible).
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Headroom multiplier applied to the platform token cap, so the model is
/// not cut off mid-sentence at exactly the cap.
const TOKEN_HEADROOM: f32 = 1.5;

const TOP_P: f32 = 0.9;
const FREQUENCY_PENALTY: f32 = 0.2;
const PRESENCE_PENALTY: f32 = 0.1;

const SYSTEM_PROMPT: &str = "You are an expert copywriter specialised in digital marketing \
     with 10 years of experience. Create original, persuasive content optimised for each platform.";

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for the upstream chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error body shape many OpenAI-compatible providers return on failure.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

/// A successful completion: the generated text plus usage metadata.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub tokens_used: u32,
}

// ── Gateway ───────────────────────────────────────────────────────────────────

/// Connection settings for the upstream provider, fixed at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    /// `None` means the service is not configured; `/generate` fails fast
    /// without attempting a network call.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            api_key: None,
            model: "openai/gpt-4o-mini".into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Issues the outbound completion call.  Holds no mutable state; safe to
/// share across concurrent requests.
#[derive(Debug, Clone)]
pub struct CompletionGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl CompletionGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerateError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn api_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Token budget for a platform: the per-platform cap with fixed headroom.
    pub fn token_budget(platform: &PlatformConfig) -> u32 {
        (platform.max_output_tokens as f32 * TOKEN_HEADROOM) as u32
    }

    /// Sampling temperature: the tone override wins over the platform default.
    pub fn resolve_temperature(platform: &PlatformConfig, tone: &ToneDirective) -> f32 {
        tone.temperature_override.unwrap_or(platform.temperature)
    }

    /// Send the composed prompt upstream and classify the outcome.
    pub async fn complete(
        &self,
        prompt: &str,
        platform: &PlatformConfig,
        tone: &ToneDirective,
    ) -> Result<Completion, GenerateError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerateError::ConfigurationMissing)?;

        let body = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompt.to_owned(),
                },
            ],
            max_tokens: Self::token_budget(platform),
            temperature: Self::resolve_temperature(platform, tone),
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        };

        debug!(
            model = %body.model,
            max_tokens = body.max_tokens,
            temperature = body.temperature,
            "sending completion request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("upstream returned status {status}"));
            return Err(GenerateError::UpstreamRejected(message));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Internal(format!("malformed upstream response: {e}")))?;

        let choice = parsed
            .choices
            .first()
            .ok_or(GenerateError::UpstreamEmptyResponse)?;

        Ok(Completion {
            text: choice.message.content.clone(),
            tokens_used: parsed.usage.map(|u| u.total_tokens).unwrap_or(0),
        })
    }
}

/// Map a reqwest transport error onto the gateway taxonomy.
fn classify_transport_error(e: reqwest::Error) -> GenerateError {
    if e.is_timeout() {
        GenerateError::UpstreamTimeout
    } else if e.is_connect() || e.is_request() {
        GenerateError::UpstreamUnavailable
    } else {
        GenerateError::Internal(e.to_string())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::Catalog;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};

    #[derive(Clone)]
    enum StubMode {
        Success,
        EmptyChoices,
        Reject,
        Slow,
    }

    #[derive(Clone)]
    struct Stub {
        hits: Arc<AtomicUsize>,
        mode: StubMode,
    }

    async fn stub_handler(State(stub): State<Stub>) -> axum::response::Response {
        stub.hits.fetch_add(1, Ordering::SeqCst);
        match stub.mode {
            StubMode::Success => Json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "X"}}],
                "usage": {"total_tokens": 42}
            }))
            .into_response(),
            StubMode::EmptyChoices => Json(serde_json::json!({
                "choices": [],
                "usage": {"total_tokens": 0}
            }))
            .into_response(),
            StubMode::Reject => (
                StatusCode::PAYMENT_REQUIRED,
                Json(serde_json::json!({
                    "error": {"message": "insufficient credits"}
                })),
            )
                .into_response(),
            StubMode::Slow => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!({"choices": []})).into_response()
            }
        }
    }

    /// Bind a stub upstream on an ephemeral port; returns its endpoint URL
    /// and the invocation counter.
    async fn spawn_stub(mode: StubMode) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let stub = Stub {
            hits: Arc::clone(&hits),
            mode,
        };
        let app = Router::new()
            .route("/chat/completions", post(stub_handler))
            .with_state(stub);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/chat/completions"), hits)
    }

    fn gateway_for(endpoint: String, api_key: Option<&str>, timeout: Duration) -> CompletionGateway {
        CompletionGateway::new(GatewayConfig {
            endpoint,
            api_key: api_key.map(str::to_owned),
            model: "test-model".into(),
            timeout,
        })
        .unwrap()
    }

    fn platform_and_tone(catalog: &Catalog) -> (&PlatformConfig, &ToneDirective) {
        (
            catalog.lookup_platform("LinkedIn"),
            catalog.lookup_tone("Professional"),
        )
    }

    #[tokio::test]
    async fn success_extracts_text_and_tokens() {
        let (endpoint, hits) = spawn_stub(StubMode::Success).await;
        let gateway = gateway_for(endpoint, Some("k"), DEFAULT_TIMEOUT);
        let catalog = Catalog::default();
        let (platform, tone) = platform_and_tone(&catalog);

        let completion = gateway.complete("prompt", platform, tone).await.unwrap();
        assert_eq!(completion.text, "X");
        assert_eq!(completion.tokens_used, 42);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_calling_upstream() {
        let (endpoint, hits) = spawn_stub(StubMode::Success).await;
        let gateway = gateway_for(endpoint, None, DEFAULT_TIMEOUT);
        let catalog = Catalog::default();
        let (platform, tone) = platform_and_tone(&catalog);

        let err = gateway.complete("prompt", platform, tone).await.unwrap_err();
        assert!(matches!(err, GenerateError::ConfigurationMissing));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_choices_maps_to_empty_response() {
        let (endpoint, _) = spawn_stub(StubMode::EmptyChoices).await;
        let gateway = gateway_for(endpoint, Some("k"), DEFAULT_TIMEOUT);
        let catalog = Catalog::default();
        let (platform, tone) = platform_and_tone(&catalog);

        let err = gateway.complete("prompt", platform, tone).await.unwrap_err();
        assert!(matches!(err, GenerateError::UpstreamEmptyResponse));
    }

    #[tokio::test]
    async fn non_success_status_carries_upstream_message() {
        let (endpoint, _) = spawn_stub(StubMode::Reject).await;
        let gateway = gateway_for(endpoint, Some("k"), DEFAULT_TIMEOUT);
        let catalog = Catalog::default();
        let (platform, tone) = platform_and_tone(&catalog);

        let err = gateway.complete("prompt", platform, tone).await.unwrap_err();
        match err {
            GenerateError::UpstreamRejected(msg) => assert_eq!(msg, "insufficient credits"),
            other => panic!("expected UpstreamRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_upstream_maps_to_timeout() {
        let (endpoint, _) = spawn_stub(StubMode::Slow).await;
        let gateway = gateway_for(endpoint, Some("k"), Duration::from_millis(200));
        let catalog = Catalog::default();
        let (platform, tone) = platform_and_tone(&catalog);

        let err = gateway.complete("prompt", platform, tone).await.unwrap_err();
        assert!(matches!(err, GenerateError::UpstreamTimeout));
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_unavailable() {
        // Nothing listens on this port.
        let gateway = gateway_for(
            "http://127.0.0.1:1/chat/completions".into(),
            Some("k"),
            DEFAULT_TIMEOUT,
        );
        let catalog = Catalog::default();
        let (platform, tone) = platform_and_tone(&catalog);

        let err = gateway.complete("prompt", platform, tone).await.unwrap_err();
        assert!(matches!(err, GenerateError::UpstreamUnavailable));
    }

    #[test]
    fn token_budget_is_platform_cap_with_headroom() {
        let catalog = Catalog::default();
        let platform = catalog.lookup_platform("LinkedIn");
        assert_eq!(CompletionGateway::token_budget(platform), 600);
    }

    #[test]
    fn tone_override_beats_platform_temperature() {
        let catalog = Catalog::default();
        let platform = catalog.lookup_platform("LinkedIn");
        let humorous = catalog.lookup_tone("Humorous");
        let technical = catalog.lookup_tone("Technical");
        assert_eq!(
            CompletionGateway::resolve_temperature(platform, humorous),
            0.8
        );
        assert_eq!(
            CompletionGateway::resolve_temperature(platform, technical),
            platform.temperature
        );
    }
}
