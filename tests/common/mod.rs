#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use postsmith::llm::CompletionBackend;
use postsmith::{Audience, Credential, GenerationError, GenerationRequest, LLMParams, Tone};

/// What the scripted backend does for one platform.
#[derive(Clone)]
pub enum Script {
    Reply(String),
    Fail(GenerationError),
    Sleep(Duration, String),
}

/// In-memory completion backend keyed on the platform named in the prompt.
pub struct ScriptedBackend {
    calls: AtomicUsize,
    scripts: Vec<(&'static str, Script)>,
    pub seen: Mutex<Vec<(String, String, u32, f32)>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            scripts: Vec::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, platform: &'static str, script: Script) -> Self {
        self.scripts.push((platform, script));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn platform_of(prompt: &str) -> &'static str {
        ["LinkedIn", "Twitter", "WhatsApp"]
            .into_iter()
            .find(|name| prompt.contains(&format!(" {} post", name)))
            .unwrap_or("unknown")
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(
        &self,
        _credential: &Credential,
        system: &str,
        prompt: &str,
        params: &LLMParams,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let platform = Self::platform_of(prompt);
        self.seen.lock().unwrap().push((
            platform.to_string(),
            system.to_string(),
            params.max_tokens,
            params.temperature,
        ));

        let script = self
            .scripts
            .iter()
            .find(|(name, _)| *name == platform)
            .map(|(_, script)| script.clone())
            .unwrap_or_else(|| Script::Reply(format!("{} post", platform)));

        match script {
            Script::Reply(text) => Ok(text),
            Script::Fail(err) => Err(err),
            Script::Sleep(duration, text) => {
                tokio::time::sleep(duration).await;
                Ok(text)
            }
        }
    }
}

pub fn sample_request() -> GenerationRequest {
    GenerationRequest {
        event_description: "Launched a new AI-powered mobile app that helps users track their fitness goals".to_string(),
        tone: Tone::Excited,
        target_audience: Audience::TechProfessionals,
        include_hashtags: true,
        include_cta: false,
    }
}

pub fn credential() -> Credential {
    Credential::new("sk-test").unwrap()
}

pub fn fast_params() -> LLMParams {
    LLMParams {
        timeout: Duration::from_millis(200),
        ..LLMParams::default()
    }
}

pub fn shared(backend: ScriptedBackend) -> Arc<ScriptedBackend> {
    Arc::new(backend)
}
