//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`*Query`, `*Command`) are consumed by inbound adapters.
//! Driven ports (`*Repository`, `*Cache`) are implemented by outbound
//! adapters; each exposes a typed error enum so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod advocate_repository;
mod advocate_search_query;
mod advocate_seed_repository;
mod seed_command;
mod specialties_query;
mod specialty_cache;
mod specialty_repository;

#[cfg(test)]
pub use advocate_repository::MockAdvocateRepository;
pub use advocate_repository::{
    AdvocateRepository, AdvocateRepositoryError, FixtureAdvocateRepository,
};
#[cfg(test)]
pub use advocate_search_query::MockAdvocateSearchQuery;
pub use advocate_search_query::{AdvocateSearchQuery, FixtureAdvocateSearchQuery};
#[cfg(test)]
pub use advocate_seed_repository::MockAdvocateSeedRepository;
pub use advocate_seed_repository::{
    AdvocateSeedRepository, AdvocateSeedRepositoryError, FixtureAdvocateSeedRepository,
    SeedSummary,
};
#[cfg(test)]
pub use seed_command::MockSeedCommand;
pub use seed_command::{FixtureSeedCommand, SeedCommand};
#[cfg(test)]
pub use specialties_query::MockSpecialtiesQuery;
pub use specialties_query::{FixtureSpecialtiesQuery, SpecialtiesQuery};
#[cfg(test)]
pub use specialty_cache::MockSpecialtyCache;
pub use specialty_cache::{NoOpSpecialtyCache, SpecialtyCache, SpecialtyCacheError};
#[cfg(test)]
pub use specialty_repository::MockSpecialtyRepository;
pub use specialty_repository::{
    FixtureSpecialtyRepository, SpecialtyRepository, SpecialtyRepositoryError,
};
