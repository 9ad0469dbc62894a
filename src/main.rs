use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use postsmith::cli::{read_event_description, render_bundle, write_exports};
use postsmith::config::Settings;
use postsmith::llm::OpenAIBackend;
use postsmith::prompt::build_prompts;
use postsmith::web::{self, AppState};
use postsmith::{logging, Audience, Credential, GenerationRequest, Orchestrator, Tone};

#[derive(Parser)]
#[clap(
    name = "postsmith",
    about = "Turn an event description into LinkedIn, Twitter and WhatsApp posts"
)]
struct Cli {
    #[clap(flatten)]
    llm: LlmArgs,

    #[clap(subcommand)]
    command: Commands,
}

/// Overrides for the environment configuration.
#[derive(Args)]
struct LlmArgs {
    /// Model identifier (default: LLM_MODEL or gpt-3.5-turbo)
    #[clap(long, global = true)]
    model: Option<String>,

    /// Sampling temperature (default: LLM_TEMPERATURE or 0.7)
    #[clap(long, global = true)]
    temperature: Option<f32>,

    /// Maximum output tokens per post (default: LLM_MAX_TOKENS or 500)
    #[clap(long, global = true)]
    max_tokens: Option<u32>,

    /// Per-platform request timeout in seconds (default: LLM_TIMEOUT_SECS or 60)
    #[clap(long, global = true)]
    timeout_secs: Option<u64>,

    /// OpenAI-compatible API base URL (default: OPENAI_API_BASE)
    #[clap(long, global = true)]
    api_base: Option<String>,
}

impl LlmArgs {
    fn apply(self, settings: &mut Settings) {
        if let Some(model) = self.model {
            settings.llm.model = model;
        }
        if let Some(temperature) = self.temperature {
            settings.llm.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            settings.llm.max_tokens = max_tokens;
        }
        if let Some(secs) = self.timeout_secs {
            settings.llm.timeout = Duration::from_secs(secs);
        }
        if let Some(api_base) = self.api_base {
            settings.api_base = api_base;
        }
    }
}

#[derive(Args)]
struct PostArgs {
    /// What happened. Use "-" to read it from stdin.
    #[clap(short, long)]
    event: String,

    #[clap(short, long, value_enum, default_value_t = Tone::Professional)]
    tone: Tone,

    #[clap(short, long, value_enum, default_value_t = Audience::General)]
    audience: Audience,

    /// Ask for posts without hashtags
    #[clap(long)]
    no_hashtags: bool,

    /// Ask for posts without a call-to-action
    #[clap(long)]
    no_cta: bool,
}

impl PostArgs {
    fn into_request(self) -> Result<GenerationRequest> {
        Ok(GenerationRequest {
            event_description: read_event_description(&self.event)?,
            tone: self.tone,
            target_audience: self.audience,
            include_hashtags: !self.no_hashtags,
            include_cta: !self.no_cta,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate posts for every platform
    Generate {
        #[clap(flatten)]
        post: PostArgs,

        /// API key (default: OPENAI_API_KEY)
        #[clap(long)]
        api_key: Option<String>,

        /// Write each post and the combined file into this directory
        #[clap(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the prompts that would be sent, without calling the API
    Prompts {
        #[clap(flatten)]
        post: PostArgs,
    },

    /// Serve the web form
    Serve {
        /// Listen port (default: PORT or 8080)
        #[clap(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    cli.llm.apply(&mut settings);
    logging::configure_logging(&settings.log_dir)?;

    match cli.command {
        Commands::Generate {
            post,
            api_key,
            output_dir,
            json,
        } => {
            let request = post.into_request()?;
            let credential = Credential::resolve(api_key.as_deref(), settings.api_key.as_deref());
            let orchestrator = build_orchestrator(&settings)?;

            let bundle = orchestrator.generate(&request, credential.as_ref()).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&bundle.to_view())?);
            } else {
                println!("{}", render_bundle(&bundle));
            }

            if let Some(dir) = output_dir {
                let written = write_exports(&bundle, &dir)?;
                eprintln!(
                    "{} {} files written to {}",
                    "📥".bright_green(),
                    written.len(),
                    dir.display()
                );
            }
        }
        Commands::Prompts { post } => {
            let request = post.into_request()?;
            for (platform, prompt) in build_prompts(&request) {
                println!("{}", format!("── {} ──", platform.name).bright_blue());
                println!("{}\n", prompt);
            }
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(settings.port);
            let orchestrator = build_orchestrator(&settings)?;
            let params = orchestrator.params();
            info!(
                "Using model {} at {} (temperature {}, max tokens {}, timeout {:?})",
                params.model,
                settings.api_base,
                params.temperature,
                params.max_tokens,
                params.timeout
            );
            let state = AppState {
                orchestrator,
                default_api_key: settings.api_key.clone(),
            };
            web::serve(state, port).await?;
        }
    }

    Ok(())
}

fn build_orchestrator(settings: &Settings) -> Result<Orchestrator> {
    let backend = OpenAIBackend::new(settings.api_base.clone())?;
    Ok(Orchestrator::new(Arc::new(backend), settings.llm.clone()))
}
