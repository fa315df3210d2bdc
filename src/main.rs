use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod services;
mod state;
mod templates;
mod types;
mod web;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_qa_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting Finance Q&A Bot");

    // Load configuration
    let config = config::Config::from_env()?;

    // The completion client is constructed once and lives for the process lifetime
    let completions = Arc::new(services::CompletionClient::new(&config));

    // Create application state
    let app_state = state::AppState::new(config, completions)?;

    // Start web server
    web::start_server(app_state).await?;

    Ok(())
}
