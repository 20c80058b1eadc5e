//! Builders wiring driven adapters into the use-case services behind
//! [`HttpStatePorts`].

use std::sync::Arc;
use std::time::Duration;

use advocate_directory::domain::ports::{
    AdvocateRepository, AdvocateSeedRepository, SpecialtyRepository,
};
use advocate_directory::domain::{AdvocateSearchService, SeedService, SpecialtiesService};
use advocate_directory::inbound::http::state::HttpStatePorts;
use advocate_directory::outbound::cache::InMemorySpecialtyCache;
use advocate_directory::outbound::memory::InMemoryAdvocateStore;
use advocate_directory::outbound::persistence::{
    DieselAdvocateRepository, DieselAdvocateSeedRepository, DieselSpecialtyRepository,
};

use super::ServerConfig;

/// Wrap the three driven adapters in services sharing one specialty cache,
/// so seeding invalidates what the catalogue endpoint serves.
fn build_services<A, S, D>(
    advocates: Arc<A>,
    specialties: Arc<S>,
    seeds: Arc<D>,
    specialties_ttl: Duration,
) -> HttpStatePorts
where
    A: AdvocateRepository + 'static,
    S: SpecialtyRepository + 'static,
    D: AdvocateSeedRepository + 'static,
{
    let cache = Arc::new(InMemorySpecialtyCache::default());
    HttpStatePorts {
        advocates: Arc::new(AdvocateSearchService::new(advocates)),
        specialties: Arc::new(SpecialtiesService::new(
            specialties,
            Arc::clone(&cache),
            specialties_ttl,
        )),
        seed: Arc::new(SeedService::new(seeds, cache)),
    }
}

/// Use the Diesel adapters when a pool is configured, otherwise a single
/// in-memory store behind all three ports.
pub(super) fn build_http_ports(config: &ServerConfig) -> HttpStatePorts {
    match &config.db_pool {
        Some(pool) => build_services(
            Arc::new(DieselAdvocateRepository::new(pool.clone())),
            Arc::new(DieselSpecialtyRepository::new(pool.clone())),
            Arc::new(DieselAdvocateSeedRepository::new(pool.clone())),
            config.specialties_ttl,
        ),
        None => {
            let store = Arc::new(InMemoryAdvocateStore::default());
            build_services(
                Arc::clone(&store),
                Arc::clone(&store),
                store,
                config.specialties_ttl,
            )
        }
    }
}
