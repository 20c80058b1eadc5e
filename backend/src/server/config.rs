//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use advocate_directory::domain::DEFAULT_SPECIALTIES_TTL;
use advocate_directory::outbound::persistence::DbPool;
use advocate_directory::settings::Environment;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) environment: Environment,
    pub(crate) specialties_ttl: Duration,
    pub(crate) seed_on_startup: bool,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Production configuration listening on `bind_addr` with the
    /// in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            environment: Environment::default(),
            specialties_ttl: DEFAULT_SPECIALTIES_TTL,
            seed_on_startup: false,
            db_pool: None,
        }
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn with_specialties_ttl(mut self, ttl: Duration) -> Self {
        self.specialties_ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_seed_on_startup(mut self, seed_on_startup: bool) -> Self {
        self.seed_on_startup = seed_on_startup;
        self
    }

    /// Attach a database connection pool.
    ///
    /// When provided, the server uses the Diesel adapters instead of the
    /// in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether the directory is reseeded before serving. The in-memory
    /// store starts empty, so it is always seeded.
    #[must_use]
    pub fn seeds_on_startup(&self) -> bool {
        self.seed_on_startup || self.db_pool.is_none()
    }
}
