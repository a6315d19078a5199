use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Which skill extractor the service runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorBackend {
    Vocabulary,
    Llm,
}

impl FromStr for ExtractorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vocabulary" => Ok(ExtractorBackend::Vocabulary),
            "llm" => Ok(ExtractorBackend::Llm),
            other => bail!("SKILL_EXTRACTOR must be 'vocabulary' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every field has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub jobs_csv: PathBuf,
    pub google_api_key: Option<String>,
    pub llm_model: String,
    /// Overrides the Gemini endpoint root, e.g. for a proxy.
    pub llm_base_url: Option<String>,
    pub llm_timeout: Duration,
    pub skill_extractor: ExtractorBackend,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let llm_timeout_secs = var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        let skill_extractor = var("SKILL_EXTRACTOR")
            .map(|value| value.parse::<ExtractorBackend>())
            .transpose()?
            .unwrap_or(ExtractorBackend::Vocabulary);

        Ok(Config {
            port,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            jobs_csv: var("JOBS_CSV")
                .unwrap_or_else(|| "data/jobs.csv".to_string())
                .into(),
            google_api_key: var("GOOGLE_API_KEY").filter(|key| !key.trim().is_empty()),
            llm_model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_base_url: var("LLM_BASE_URL").filter(|url| !url.trim().is_empty()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            skill_extractor,
        })
    }
}
