//! Products API - REST server over an in-memory product store

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Build REST router; the repository is constructed (and seeded)
    // explicitly here rather than through process-wide globals.
    let api_routes = api::routes();
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!("Starting Products API on port {}", config.server.port);

    create_app(app, &config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
