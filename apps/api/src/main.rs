mod analytics;
mod config;
mod contact;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{ContactStore, CounterStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let (counters, contacts): (Arc<dyn CounterStore>, Arc<dyn ContactStore>) =
        match &config.database_url {
            Some(url) => {
                let store = Arc::new(PgStore::new(create_pool(url, &config).await?));
                (store.clone() as Arc<dyn CounterStore>, store as Arc<dyn ContactStore>)
            }
            None => {
                info!("DATABASE_URL not set, using in-memory storage");
                let store = Arc::new(MemoryStore::new());
                (store.clone() as Arc<dyn CounterStore>, store as Arc<dyn ContactStore>)
            }
        };
    info!(
        "Resume analytics subject '{}', store timeout {:?}",
        config.analytics_subject, config.store_timeout
    );

    let state = AppState::new(config.clone(), counters, contacts);

    // The site is served from a different origin than the API.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
