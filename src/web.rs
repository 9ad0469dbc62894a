//! Operator-facing form and JSON API.

use anyhow::{Context, Result};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::bundle::BundleView;
use crate::orchestrator::Orchestrator;
use crate::platform::PLATFORMS;
use crate::request::{Audience, Credential, GenerationRequest, Tone};
use crate::TARGET_WEB_REQUEST;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared handler state. The default key comes from the environment and is only used
/// when the form leaves the key field empty.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub default_api_key: Option<String>,
}

/// Body of `POST /api/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub request: GenerationRequest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}

#[derive(Serialize)]
pub struct ToneOption {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct PlatformOption {
    pub name: &'static str,
    pub slug: &'static str,
    pub hard_limit: Option<usize>,
}

#[derive(Serialize)]
pub struct OptionsResponse {
    pub tones: Vec<ToneOption>,
    pub audiences: Vec<&'static str>,
    pub platforms: Vec<PlatformOption>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/options", get(options))
        .route("/api/generate", post(generate))
        .with_state(state)
}

/// Serves the form until Ctrl-C.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(target: TARGET_WEB_REQUEST, "Server running on http://{}", addr);

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!(target: TARGET_WEB_REQUEST, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        error!("Failed to listen for ctrl-c");
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        tones: Tone::ALL
            .iter()
            .map(|tone| ToneOption {
                name: tone.as_str(),
                description: tone.description(),
            })
            .collect(),
        audiences: Audience::ALL.iter().map(|a| a.as_str()).collect(),
        platforms: PLATFORMS
            .iter()
            .map(|p| PlatformOption {
                name: p.name,
                slug: p.slug,
                hard_limit: p.hard_limit,
            })
            .collect(),
    })
}

/// Runs one generation request. Precondition failures answer 400 without any upstream call;
/// per-platform failures are part of a normal 200 response.
pub async fn generate(State(state): State<AppState>, Json(body): Json<GenerateBody>) -> Response {
    let credential = Credential::resolve(body.api_key.as_deref(), state.default_api_key.as_deref());
    info!(
        target: TARGET_WEB_REQUEST,
        "Generate request: tone={}, audience={}, hashtags={}, cta={}, event={} chars",
        body.request.tone,
        body.request.target_audience,
        body.request.include_hashtags,
        body.request.include_cta,
        body.request.event_description.chars().count()
    );

    match state
        .orchestrator
        .generate(&body.request, credential.as_ref())
        .await
    {
        Ok(bundle) => {
            let view: BundleView = bundle.to_view();
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => {
            warn!(target: TARGET_WEB_REQUEST, "Generate request refused: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                    kind: e.kind().to_string(),
                }),
            )
                .into_response()
        }
    }
}
