pub mod bundle;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod llm;
pub mod logging;
pub mod orchestrator;
pub mod platform;
pub mod prompt;
pub mod request;
pub mod web;

use std::time::Duration;

pub use bundle::{GeneratedPost, PostBundle};
pub use error::{GenerationError, PreconditionError};
pub use orchestrator::Orchestrator;
pub use request::{Audience, Credential, GenerationRequest, Tone};

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_LLM_REQUEST: &str = "llm_request";

/// Fixed generation parameters shared by every completion call.
#[derive(Clone, Debug)]
pub struct LLMParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound for a single platform's completion call.
    pub timeout: Duration,
}

impl Default for LLMParams {
    fn default() -> Self {
        Self {
            model: config::DEFAULT_MODEL.to_string(),
            temperature: config::DEFAULT_TEMPERATURE,
            max_tokens: config::DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
        }
    }
}
