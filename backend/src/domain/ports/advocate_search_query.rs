//! Driving port for advocate search.

use async_trait::async_trait;
use pagination::Paginated;

use crate::domain::{Advocate, Error, SearchRequest};

/// Use-case port consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvocateSearchQuery: Send + Sync {
    /// Return the requested page of advocates matching the filters.
    async fn search(&self, request: &SearchRequest) -> Result<Paginated<Advocate>, Error>;
}

/// Fixture query that never matches anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdvocateSearchQuery;

#[async_trait]
impl AdvocateSearchQuery for FixtureAdvocateSearchQuery {
    async fn search(&self, request: &SearchRequest) -> Result<Paginated<Advocate>, Error> {
        Ok(Paginated::empty(request.page))
    }
}
