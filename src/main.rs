mod config;
mod dictionary;
mod query;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use config::Config;
use dictionary::DictionaryStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Word lists, loaded once before the listener starts
    pub dictionaries: DictionaryStore,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_lookup_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word lookup service...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionaries
    let dictionaries = DictionaryStore::load(&config.dictionary.dir)
        .await
        .context("Failed to load dictionaries")?;
    if dictionaries.is_empty() {
        tracing::warn!(
            "No dictionaries found in {}; every word query will fail until word lists are added",
            config.dictionary.dir.display()
        );
    } else {
        tracing::info!(
            "Dictionaries loaded for: {}",
            dictionaries
                .loaded_languages()
                .iter()
                .map(|lang| lang.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let addr = config.server_addr();
    let state = Arc::new(AppState {
        config,
        dictionaries,
    });

    tracing::info!(
        "Serving word lists from {}",
        state.config.dictionary.dir.display()
    );

    let app = build_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Word lookup: http://{}/api/words/{{language}}?chars=a,b", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
