use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Groq API key (bearer credential for the upstream model call)
    pub groq_api_key: String,

    /// Groq API base URL (OpenAI-compatible)
    #[serde(default = "default_groq_api_url")]
    pub groq_api_url: String,

    /// Chat-completion model identifier
    #[serde(default = "default_groq_model")]
    pub groq_model: String,

    /// Sampling temperature for the upstream call
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Timeout for the upstream call, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Comma-separated list of allowed CORS origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_groq_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_temperature() -> f32 {
    0.4
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_allowed_origins() -> String {
    "http://localhost:5500,http://127.0.0.1:5500".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A missing `GROQ_API_KEY` fails here, at startup, rather than on the
    /// first request.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Parsed CORS origin list, skipping entries that are not valid header values
    pub fn origin_list(&self) -> Vec<axum::http::HeaderValue> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }
}
