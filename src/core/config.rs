use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

/// OpenAI compatible endpoint of the hosted Gemini models.
pub const DEFAULT_LLM_HOST: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;
const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub llm_api_hostname: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    /// Sessions with no activity for this long are ended
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Read the config from the process environment. A missing API
    /// key is an error since no turn can succeed without it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm_api_key = lookup("GOOGLE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(anyhow!("Missing env var GOOGLE_API_KEY"))?;
        let llm_api_hostname =
            lookup("MEDIBOT_LLM_HOST").unwrap_or_else(|| DEFAULT_LLM_HOST.to_string());
        let llm_model =
            lookup("MEDIBOT_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());
        let llm_timeout = secs_var(&lookup, "MEDIBOT_LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?;
        let session_ttl = secs_var(&lookup, "MEDIBOT_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;

        Ok(Self {
            llm_api_hostname,
            llm_api_key,
            llm_model,
            llm_timeout,
            session_ttl,
        })
    }
}

fn secs_var<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(secs) => Ok(Duration::from_secs(
            secs.trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", key, secs))?,
        )),
        None => Ok(Duration::from_secs(default)),
    }
}
