//! Specialty catalogue with cache-aside reads.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::Error;
use crate::domain::ports::{SpecialtiesQuery, SpecialtyCache, SpecialtyRepository};

/// Cache key holding the full sorted catalogue.
pub const SPECIALTIES_CACHE_KEY: &str = "specialties:all";
/// Tag attached to every specialty cache entry; invalidated after reseeding.
pub const SPECIALTIES_CACHE_TAG: &str = "specialties";
/// Default freshness window for the cached catalogue.
pub const DEFAULT_SPECIALTIES_TTL: Duration = Duration::from_secs(3600);
/// Message returned to clients when the catalogue cannot be read.
pub const SPECIALTIES_FAILURE_MESSAGE: &str =
    "Unable to load specialties. Please try again later.";

/// Service implementing [`SpecialtiesQuery`] over a repository and cache.
///
/// Cache failures are logged and bypassed; only repository failures reach
/// the caller.
#[derive(Clone)]
pub struct SpecialtiesService<R, C> {
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> SpecialtiesService<R, C> {
    /// Create a service caching results for `ttl`.
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }
}

#[async_trait]
impl<R, C> SpecialtiesQuery for SpecialtiesService<R, C>
where
    R: SpecialtyRepository,
    C: SpecialtyCache,
{
    async fn list_specialties(&self) -> Result<Vec<String>, Error> {
        match self.cache.get(SPECIALTIES_CACHE_KEY).await {
            Ok(Some(names)) => return Ok(names),
            Ok(None) => {}
            Err(err) => warn!(error = %err, key = SPECIALTIES_CACHE_KEY, "specialty cache read failed"),
        }

        let names = self.repository.list_specialty_names().await.map_err(|err| {
            error!(error = %err, "failed to load specialties");
            Error::internal(SPECIALTIES_FAILURE_MESSAGE).with_diagnostic(err.to_string())
        })?;

        if let Err(err) = self
            .cache
            .put(
                SPECIALTIES_CACHE_KEY,
                names.clone(),
                self.ttl,
                &[SPECIALTIES_CACHE_TAG],
            )
            .await
        {
            warn!(error = %err, key = SPECIALTIES_CACHE_KEY, "specialty cache write failed");
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        MockSpecialtyCache, MockSpecialtyRepository, SpecialtyCacheError,
        SpecialtyRepositoryError,
    };
    use rstest::rstest;

    fn names() -> Vec<String> {
        vec!["Bipolar".to_owned(), "LGBTQ".to_owned()]
    }

    fn service(
        repository: MockSpecialtyRepository,
        cache: MockSpecialtyCache,
    ) -> SpecialtiesService<MockSpecialtyRepository, MockSpecialtyCache> {
        SpecialtiesService::new(Arc::new(repository), Arc::new(cache), DEFAULT_SPECIALTIES_TTL)
    }

    #[rstest]
    #[tokio::test]
    async fn cache_hit_skips_the_repository() {
        let mut repository = MockSpecialtyRepository::new();
        repository.expect_list_specialty_names().times(0);
        let mut cache = MockSpecialtyCache::new();
        cache
            .expect_get()
            .withf(|key| key == SPECIALTIES_CACHE_KEY)
            .return_once(|_| Ok(Some(names())));
        cache.expect_put().times(0);

        let listed = service(repository, cache)
            .list_specialties()
            .await
            .expect("cached names");
        assert_eq!(listed, names());
    }

    #[rstest]
    #[tokio::test]
    async fn cache_miss_reads_through_and_stores_with_tag() {
        let mut repository = MockSpecialtyRepository::new();
        repository
            .expect_list_specialty_names()
            .times(1)
            .return_once(|| Ok(names()));
        let mut cache = MockSpecialtyCache::new();
        cache.expect_get().return_once(|_| Ok(None));
        cache
            .expect_put()
            .withf(|key, value, ttl, tags| {
                key == SPECIALTIES_CACHE_KEY
                    && value.len() == 2
                    && *ttl == DEFAULT_SPECIALTIES_TTL
                    && tags == [SPECIALTIES_CACHE_TAG]
            })
            .times(1)
            .return_once(|_, _, _, _| Ok(()));

        let listed = service(repository, cache)
            .list_specialties()
            .await
            .expect("fresh names");
        assert_eq!(listed, names());
    }

    #[rstest]
    #[tokio::test]
    async fn cache_failures_are_bypassed() {
        let mut repository = MockSpecialtyRepository::new();
        repository
            .expect_list_specialty_names()
            .return_once(|| Ok(names()));
        let mut cache = MockSpecialtyCache::new();
        cache
            .expect_get()
            .return_once(|_| Err(SpecialtyCacheError::backend("down")));
        cache
            .expect_put()
            .return_once(|_, _, _, _| Err(SpecialtyCacheError::backend("down")));

        let listed = service(repository, cache)
            .list_specialties()
            .await
            .expect("names despite cache");
        assert_eq!(listed, names());
    }

    #[rstest]
    #[tokio::test]
    async fn repository_failure_is_reported_generically() {
        let mut repository = MockSpecialtyRepository::new();
        repository
            .expect_list_specialty_names()
            .return_once(|| Err(SpecialtyRepositoryError::query("relation missing")));
        let mut cache = MockSpecialtyCache::new();
        cache.expect_get().return_once(|_| Ok(None));
        cache.expect_put().times(0);

        let err = service(repository, cache)
            .list_specialties()
            .await
            .expect_err("store failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), SPECIALTIES_FAILURE_MESSAGE);
    }
}
