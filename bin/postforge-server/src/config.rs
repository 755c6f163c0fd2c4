//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for postforge-server.
///
/// Every field except the API key has a sensible default so the server works
/// out-of-the-box without any environment variables set.  Without
/// `POSTFORGE_API_KEY` the server still starts, but every `/generate` call
/// fails fast with a configuration error instead of attempting the upstream
/// call.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8080"`).
    pub bind_address: String,

    /// Upstream completion API key.  `None` when unset.
    pub api_key: Option<String>,

    /// Model identifier sent to the upstream provider.
    pub model: String,

    /// Upstream chat-completions endpoint URL.
    pub upstream_url: String,

    /// Bound on the upstream call, in seconds.
    pub timeout_secs: u64,

    /// Secret used to sign session cookies.
    pub session_secret: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated CORS origin allow-list; unset means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui` (disable in production).
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("POSTFORGE_BIND", "0.0.0.0:8080"),
            api_key: std::env::var("POSTFORGE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: env_or("POSTFORGE_MODEL", "openai/gpt-4o-mini"),
            upstream_url: env_or(
                "POSTFORGE_UPSTREAM_URL",
                postforge_core::gateway::DEFAULT_ENDPOINT,
            ),
            timeout_secs: parse_env("POSTFORGE_TIMEOUT_SECS", 45),
            session_secret: env_or("POSTFORGE_SESSION_SECRET", "dev-secret-change-in-production"),
            log_level: env_or("POSTFORGE_LOG", "info"),
            log_json: std::env::var("POSTFORGE_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            cors_allowed_origins: std::env::var("POSTFORGE_CORS_ORIGINS").ok(),
            enable_swagger: std::env::var("POSTFORGE_ENABLE_SWAGGER")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
