//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for mindful-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Identity every request acts as until real authentication exists.
    pub demo_user_id: String,

    /// Comma-separated CORS origin allow-list. `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Mount Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    /// Hosted language model settings.
    pub gemini: GeminiConfig,
}

/// Connection settings for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; when absent the companion answers from curated guides only.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("MINDFUL_BIND", "0.0.0.0:5000"),
            log_level: env_or("MINDFUL_LOG", "info"),
            log_json: env_flag("MINDFUL_LOG_JSON", false),
            demo_user_id: env_or("MINDFUL_DEMO_USER_ID", DEFAULT_DEMO_USER_ID),
            cors_allowed_origins: env_opt("MINDFUL_CORS_ORIGINS"),
            enable_swagger: env_flag("MINDFUL_ENABLE_SWAGGER", true),
            gemini: GeminiConfig {
                api_key: env_opt("GEMINI_API_KEY"),
                model: env_or("MINDFUL_GEMINI_MODEL", "gemini-1.5-flash"),
                base_url: env_or(
                    "MINDFUL_GEMINI_BASE_URL",
                    "https://generativelanguage.googleapis.com/v1beta",
                ),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            demo_user_id: DEFAULT_DEMO_USER_ID.to_owned(),
            cors_allowed_origins: None,
            enable_swagger: true,
            gemini: GeminiConfig {
                api_key: None,
                model: "gemini-1.5-flash".to_owned(),
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            },
        }
    }
}

/// Placeholder identity used by storage defaults and route handlers.
pub const DEFAULT_DEMO_USER_ID: &str = "demo-user";

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_uses_demo_identity() {
        let cfg = Config::default();
        assert_eq!(cfg.demo_user_id, DEFAULT_DEMO_USER_ID);
        assert!(cfg.gemini.api_key.is_none());
        assert!(cfg.enable_swagger);
    }
}
