use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod http;
mod metrics;

use config::AppConfig;
use http::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,campus_ledger=debug")),
        )
        .init();

    let config = AppConfig::from_env();
    let bind = (config.host.clone(), config.port);

    tracing::info!("Starting CampusPay ledger service");
    tracing::info!(
        default_asset_id = config.campus_token_id,
        "Ledger stores initialized (in-memory, process lifetime)"
    );

    let state = web::Data::new(AppState::new(config)?);

    tracing::info!("Listening on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http::routes::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
