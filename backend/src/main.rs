//! Backend entry-point: loads settings, wires the recipe store and serves
//! the REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recipe_catalogue::inbound::http::health::HealthState;
use recipe_catalogue::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server, drain_after, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url.as_deref() {
        Some(url) => {
            if settings.run_migrations() {
                let applied = run_pending_migrations(url)
                    .await
                    .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
                info!(applied, "database schema up to date");
            }
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("RECIPES_DATABASE_URL not set; recipes are kept in memory only");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_after(
        shutdown_signal(),
        health_state,
        server.handle(),
    ));
    info!(%bind_addr, "recipe catalogue listening");
    server.await
}
