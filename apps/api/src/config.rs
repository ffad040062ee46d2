use anyhow::{bail, Context, Result};

/// LLM provider resolved once at startup from whichever credential is present.
/// OpenAI is checked first; Gemini is used through its OpenAI-compatible endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi { api_key: String },
    Gemini { api_key: String },
}

impl LlmProvider {
    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi { .. } => "openai",
            LlmProvider::Gemini { .. } => "gemini",
        }
    }

    pub fn api_key(&self) -> &str {
        match self {
            LlmProvider::OpenAi { api_key } | LlmProvider::Gemini { api_key } => api_key,
        }
    }

    /// Base URL of the chat completions API, without the `/chat/completions` suffix.
    pub fn base_url(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi { .. } => "https://api.openai.com/v1",
            LlmProvider::Gemini { .. } => "https://generativelanguage.googleapis.com/v1beta/openai",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi { .. } => "gpt-4o",
            LlmProvider::Gemini { .. } => "gemini-1.5-flash",
        }
    }
}

// Keys must never end up in logs.
impl std::fmt::Debug for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmProvider")
            .field("name", &self.name())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if no LLM credential is available.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: LlmProvider,
    /// Overrides the provider's default model when set (`LLM_MODEL`).
    pub model_override: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            provider: resolve_provider(&non_empty)?,
            model_override: non_empty("LLM_MODEL"),
            port: non_empty("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// The model name sent with every completion request.
    pub fn model(&self) -> &str {
        self.model_override
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }
}

fn resolve_provider<F>(lookup: &F) -> Result<LlmProvider>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("OPENAI_API_KEY") {
        return Ok(LlmProvider::OpenAi { api_key });
    }
    if let Some(api_key) = lookup("GEMINI_API_KEY") {
        return Ok(LlmProvider::Gemini { api_key });
    }
    bail!("No valid LLM API key found in environment (OPENAI_API_KEY or GEMINI_API_KEY)")
}
