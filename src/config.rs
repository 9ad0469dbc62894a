use std::path::PathBuf;
use std::time::Duration;

use crate::environment::{get_env_parsed, get_env_var, get_env_var_or};
use crate::llm::DEFAULT_API_BASE;
use crate::LLMParams;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Process-wide settings, read once at start-up.
#[derive(Clone)]
pub struct Settings {
    /// Default credential, used when the operator does not supply one.
    pub api_key: Option<String>,
    pub api_base: String,
    pub llm: LLMParams,
    pub port: u16,
    pub log_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_key: get_env_var("OPENAI_API_KEY"),
            api_base: get_env_var_or("OPENAI_API_BASE", DEFAULT_API_BASE),
            llm: LLMParams {
                model: get_env_var_or("LLM_MODEL", DEFAULT_MODEL),
                temperature: get_env_parsed("LLM_TEMPERATURE", DEFAULT_TEMPERATURE),
                max_tokens: get_env_parsed("LLM_MAX_TOKENS", DEFAULT_MAX_TOKENS),
                timeout: Duration::from_secs(get_env_parsed("LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            },
            port: get_env_parsed("PORT", DEFAULT_PORT),
            log_dir: PathBuf::from(get_env_var_or("LOG_DIR", DEFAULT_LOG_DIR)),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            llm: LLMParams::default(),
            port: DEFAULT_PORT,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

// Skip the key in Debug output
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("llm", &self.llm)
            .field("port", &self.port)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
