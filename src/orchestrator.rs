use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::bundle::{GeneratedPost, PostBundle};
use crate::error::PreconditionError;
use crate::llm::{generate_post, CompletionBackend};
use crate::prompt::build_prompts;
use crate::request::{Credential, GenerationRequest};
use crate::{LLMParams, TARGET_LLM_REQUEST};

/// Runs one generation request across every platform.
#[derive(Clone)]
pub struct Orchestrator {
    backend: Arc<dyn CompletionBackend>,
    params: LLMParams,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn CompletionBackend>, params: LLMParams) -> Self {
        Self { backend, params }
    }

    pub fn params(&self) -> &LLMParams {
        &self.params
    }

    /// Checks the credential first, then the event description.
    pub fn check_preconditions<'a>(
        request: &GenerationRequest,
        credential: Option<&'a Credential>,
    ) -> Result<&'a Credential, PreconditionError> {
        let credential = credential.ok_or(PreconditionError::MissingCredential)?;
        if !request.has_event_description() {
            return Err(PreconditionError::EmptyEventDescription);
        }
        Ok(credential)
    }

    /// Generates one post per platform.
    ///
    /// Nothing is sent when a precondition fails. Otherwise the platform calls run
    /// concurrently and each failure stays in its own [`GeneratedPost`]; the bundle
    /// is always complete and in table order.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        credential: Option<&Credential>,
    ) -> Result<PostBundle, PreconditionError> {
        let credential = Self::check_preconditions(request, credential)?;

        let request_id = Uuid::new_v4();
        let start = Instant::now();
        info!(
            target: TARGET_LLM_REQUEST,
            "Request {}: generating {} / {} posts for {}",
            request_id, request.tone, request.target_audience, self.params.model
        );

        let prompts = build_prompts(request);
        let backend = self.backend.as_ref();
        let params = &self.params;

        let posts = join_all(prompts.iter().map(|(platform, prompt)| {
            let platform = *platform;
            async move {
                let outcome =
                    generate_post(backend, credential, platform.name, prompt, params).await;
                GeneratedPost::new(platform, outcome)
            }
        }))
        .await;

        let bundle = PostBundle::new(request_id, posts);
        info!(
            target: TARGET_LLM_REQUEST,
            "Request {}: finished in {}ms ({} of {} failed)",
            request_id,
            start.elapsed().as_millis(),
            bundle.failed_count(),
            bundle.posts().len()
        );
        debug!(target: TARGET_LLM_REQUEST, "Request {}: {:?}", request_id, bundle);

        Ok(bundle)
    }
}
