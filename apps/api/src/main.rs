mod ads;
mod auth;
mod config;
mod db;
mod errors;
mod images;
mod layout;
mod models;
mod repository;
mod routes;
mod state;
mod wall;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::images::CloudinaryHost;
use crate::layout::ShuffleMode;
use crate::repository::PgAdRepository;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sponsor Wall API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let ads = Arc::new(PgAdRepository::new(db));

    // Initialize image host
    let images = Arc::new(CloudinaryHost::new(
        config.cloudinary_cloud_name.clone(),
        config.cloudinary_api_key.clone(),
        config.cloudinary_api_secret.clone(),
        config.cloudinary_folder.clone(),
    )?);
    info!(
        "Cloudinary client initialized (cloud: {}, folder: {})",
        config.cloudinary_cloud_name, config.cloudinary_folder
    );

    let shuffle = ShuffleMode::from_seed(config.layout_seed);
    info!(
        "Wall layout: default year {}, shuffle {:?}",
        config.default_year, shuffle
    );

    // Build app state
    let state = AppState {
        ads,
        images,
        config: config.clone(),
        shuffle,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the wall's public origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
