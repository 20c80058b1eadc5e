//! Advocate directory entry-point: loads configuration, prepares the store
//! and serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use advocate_directory::inbound::http::health::HealthState;
use advocate_directory::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use advocate_directory::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let config = ServerConfig::new(bind_addr)
        .with_environment(settings.environment())
        .with_specialties_ttl(settings.specialties_cache_ttl())
        .with_seed_on_startup(settings.seed_on_startup);

    let Some(database_url) = settings.database_url() else {
        info!("no database configured; serving an in-memory directory");
        return Ok(config);
    };
    run_pending_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    let config = server_config(&settings).await?;
    info!(
        bind_addr = %config.bind_addr(),
        environment = ?settings.environment(),
        "starting advocate directory"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).await?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
