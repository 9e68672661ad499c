use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use optimizer_service::{app_module::AppState, app_router::application, config::AppConfig};
use seo_llm::LLMClient;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &AppConfig) {
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    let result = if config.is_dev() {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
    };

    if let Err(e) = result {
        eprintln!("Setting tracing subscriber failed: {}", e);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let llm_client = Arc::new(LLMClient::new(config.llm_provider()));
    let state = AppState::new(llm_client).context("Failed to compile page template")?;

    let app = application(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Unable to bind {}", config.bind_address))?;

    tracing::info!("Server started, listening on {}", config.bind_address);
    axum::serve(listener, app)
        .await
        .context("Unable to start server")?;

    Ok(())
}
