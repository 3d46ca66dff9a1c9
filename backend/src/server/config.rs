//! Server settings loaded via OrthoConfig, plus the runtime configuration
//! handed to [`super::create_server`].

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use recipe_catalogue::outbound::persistence::DbPool;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings read from `RECIPES_*` environment variables, configuration
/// files and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// PostgreSQL connection string. Recipes are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Apply embedded migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Whether embedded migrations run at startup, falling back to `true`.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Socket address assembled from [`Self::host`] and the port.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool; recipes are then persisted in
    /// PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
