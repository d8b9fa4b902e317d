use algolens::config::AppConfig;
use algolens::llm::{LlmClient, Provider};
use algolens::server::{build_router, AppState};
use algolens::util::logging;
use algolens::VERSION;

use anyhow::Context;
use clap::Parser;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "algolens",
    version,
    about = "LLM-backed algorithmic complexity analysis service"
)]
struct CliArgs {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Generative-text provider (overrides ALGOLENS_PROVIDER)
    #[arg(long, value_enum)]
    provider: Option<Provider>,

    /// Model name (overrides ALGOLENS_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    match args.log_level.as_deref() {
        Some(level) => logging::with_level(level),
        None => logging::init_from_env(),
    }

    if let Err(err) = run(args).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let mut config = AppConfig::default();

    if let Some(provider) = args.provider {
        config.provider = provider;
        if env::var("ALGOLENS_MODEL").is_err() && args.model.is_none() {
            config.model = AppConfig::default_model(provider).to_string();
        }
    }
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(port) = args.port {
        config.listen_port = port;
    }

    config.validate().context("invalid configuration")?;

    info!("algolens v{} starting", VERSION);
    info!(provider = %config.provider, model = %config.model, "using generative backend");

    let llm: Arc<dyn LlmClient> = config
        .create_client()
        .context("failed to initialize generative backend")?;

    let router = build_router(AppState { llm }, &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on port {}", config.listen_port);
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
