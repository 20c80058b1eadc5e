//! Directory reseeding.

use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{error, info, warn};

use crate::domain::ports::{AdvocateSeedRepository, SeedCommand, SeedSummary, SpecialtyCache};
use crate::domain::{Error, SPECIALTIES_CACHE_TAG, SeedPlan};

/// Message returned to clients when reseeding fails.
pub const SEED_FAILURE_MESSAGE: &str = "Failed to seed database";

/// Service implementing [`SeedCommand`].
///
/// Reseeding deletes every advocate before inserting new ones, so it must not
/// run while search traffic is being served.
#[derive(Clone)]
pub struct SeedService<S, C> {
    repository: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> SeedService<S, C> {
    /// Create a service writing to `repository` and invalidating `cache`.
    pub fn new(repository: Arc<S>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }
}

impl<S, C> SeedService<S, C>
where
    S: AdvocateSeedRepository,
    C: SpecialtyCache,
{
    /// Apply an explicit plan. Exposed for callers that need deterministic
    /// contents.
    pub async fn apply(&self, plan: &SeedPlan) -> Result<SeedSummary, Error> {
        let summary = self.repository.replace_all(plan).await.map_err(|err| {
            error!(operation = "database_seed", error = %err, "seeding failed");
            Error::internal(SEED_FAILURE_MESSAGE).with_diagnostic(err.to_string())
        })?;

        if let Err(err) = self.cache.invalidate(SPECIALTIES_CACHE_TAG).await {
            warn!(error = %err, tag = SPECIALTIES_CACHE_TAG, "specialty cache invalidation failed");
        }

        info!(
            operation = "database_seed",
            advocates = summary.advocates,
            specialties = summary.specialties,
            relationships = summary.relationships,
            "database seeded"
        );
        Ok(summary)
    }
}

#[async_trait]
impl<S, C> SeedCommand for SeedService<S, C>
where
    S: AdvocateSeedRepository,
    C: SpecialtyCache,
{
    async fn seed(&self) -> Result<SeedSummary, Error> {
        let plan = SeedPlan::generate(&mut SmallRng::from_entropy());
        self.apply(&plan).await
    }
}
