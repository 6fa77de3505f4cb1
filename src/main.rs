//! Armory backend server
//!
//! Battle.net OAuth2 login plus an enriched WoW character profile endpoint.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armory::{AppState, BnetClient, Config, InMemorySessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        api_base = %config.api_base,
        "Loaded configuration"
    );

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        InMemorySessionStore::new(),
        BnetClient::new(config.clone()),
    ));

    // Create router
    let app = armory::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
