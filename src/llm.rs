use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client as OpenAIClient;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::GenerationError;
use crate::prompt::SYSTEM_PROMPT;
use crate::request::Credential;
use crate::{LLMParams, TARGET_LLM_REQUEST};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// A chat-completion capability: one system message, one user message, one reply.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        credential: &Credential,
        system: &str,
        prompt: &str,
        params: &LLMParams,
    ) -> Result<String, GenerationError>;
}

/// Any OpenAI-compatible chat-completion endpoint.
#[derive(Clone, Debug)]
pub struct OpenAIBackend {
    api_base: String,
    http: reqwest::Client,
}

impl OpenAIBackend {
    pub fn new(api_base: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            api_base: api_base.into(),
            http,
        })
    }

    fn client(&self, credential: &Credential) -> OpenAIClient<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_key(credential.expose())
            .with_api_base(&self.api_base);

        // One outbound request per call: the client's rate-limit backoff gives up immediately.
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        OpenAIClient::with_config(config)
            .with_http_client(self.http.clone())
            .with_backoff(no_retry)
    }
}

#[async_trait]
impl CompletionBackend for OpenAIBackend {
    #[allow(deprecated)]
    async fn complete(
        &self,
        credential: &Credential,
        system: &str,
        prompt: &str,
        params: &LLMParams,
    ) -> Result<String, GenerationError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(params.model.as_str())
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .messages(messages)
            .build()?;

        let response = self.client(credential).chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)
    }
}

/// Generates the post for one rendered prompt.
///
/// Exactly one backend call, bounded by `params.timeout`. The reply is trimmed;
/// a blank reply is reported as [`GenerationError::EmptyResponse`].
pub async fn generate_post(
    backend: &dyn CompletionBackend,
    credential: &Credential,
    platform: &str,
    prompt: &str,
    params: &LLMParams,
) -> Result<String, GenerationError> {
    let start = Instant::now();
    debug!(target: TARGET_LLM_REQUEST, "{}: sending prompt to {}: {}", platform, params.model, prompt);

    let result = match timeout(
        params.timeout,
        backend.complete(credential, SYSTEM_PROMPT, prompt, params),
    )
    .await
    {
        Ok(Ok(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Err(GenerationError::EmptyResponse)
            } else {
                Ok(text.to_string())
            }
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(GenerationError::Timeout(params.timeout)),
    };

    let elapsed = start.elapsed().as_millis();
    match &result {
        Ok(text) => {
            info!(target: TARGET_LLM_REQUEST, "{}: generated {} characters in {}ms", platform, text.chars().count(), elapsed);
        }
        Err(e) => {
            warn!(target: TARGET_LLM_REQUEST, "{}: generation failed after {}ms: {}", platform, elapsed, e);
        }
    }

    result
}
