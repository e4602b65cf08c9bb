use anyhow::{Context, Result};

const DEFAULT_NER_API_URL: &str = "https://router.huggingface.co/hf-inference/models";
const DEFAULT_NER_MODEL: &str = "yashpwr/resume-ner-bert-v2";

/// Application configuration loaded from environment variables.
/// Every field has a default; only malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the inference API. The model id is appended as a path segment.
    pub ner_api_url: String,
    pub ner_model: String,
    pub hf_token: Option<String>,
    pub ner_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. `from_env` passes
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            ner_api_url: get("NER_API_URL", DEFAULT_NER_API_URL),
            ner_model: get("NER_MODEL", DEFAULT_NER_MODEL),
            hf_token: lookup("HF_TOKEN").filter(|t| !t.trim().is_empty()),
            ner_timeout_secs: get("NER_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("NER_TIMEOUT_SECS must be a whole number of seconds")?,
            port: get("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG", "info"),
        })
    }

    /// Full inference endpoint for the configured model.
    pub fn ner_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.ner_api_url.trim_end_matches('/'),
            self.ner_model.trim_start_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ner_api_url: DEFAULT_NER_API_URL.to_string(),
            ner_model: DEFAULT_NER_MODEL.to_string(),
            hf_token: None,
            ner_timeout_secs: 60,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
