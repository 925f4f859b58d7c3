mod config;
mod errors;
mod llm_client;
mod render;
mod routes;
mod state;
mod tuner;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::Pages;
use crate::routes::{build_router, build_unconfigured_router, MISSING_KEY_NOTICE};
use crate::state::{AppState, UnconfiguredState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (also reads .env); a bad PORT aborts here
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,tower_http=info",
                env!("CARGO_PKG_NAME").replace('-', "_")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Profile Tuner v{}", env!("CARGO_PKG_VERSION"));

    let pages = Pages::new()?;

    let app = match config.require_openai() {
        Ok(openai) => {
            // Initialize LLM client
            let llm = LlmClient::new(openai)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);

            build_router(AppState {
                llm: Arc::new(llm),
                pages,
            })
        }
        Err(e) => {
            error!("{e}. Serving the missing-key notice only; no completion requests will be made");
            build_unconfigured_router(UnconfiguredState {
                pages,
                notice: MISSING_KEY_NOTICE.to_string(),
            })
        }
    };

    serve(app, config.port).await
}

async fn serve(app: Router, port: u16) -> Result<()> {
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
