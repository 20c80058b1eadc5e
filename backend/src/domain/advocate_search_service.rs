//! Advocate search orchestration.
//!
//! Filters become predicates, specialty constraints are resolved into an id
//! set, and the store is asked for a total and one page of rows which are
//! then folded into advocates.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Paginated, PaginationInfo};
use tracing::error;

use crate::domain::ports::{AdvocateRepository, AdvocateRepositoryError, AdvocateSearchQuery};
use crate::domain::{
    Advocate, AdvocatePredicate, Error, SearchRequest, build_predicates, resolve_specialty_ids,
    shape_advocates,
};

/// Message returned to clients whenever a search cannot be completed.
pub const SEARCH_FAILURE_MESSAGE: &str =
    "Unable to retrieve advocates at this time. Please try again later.";

/// Search service implementing [`AdvocateSearchQuery`].
#[derive(Clone)]
pub struct AdvocateSearchService<R> {
    repository: Arc<R>,
}

impl<R> AdvocateSearchService<R> {
    /// Create a service reading from `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> AdvocateSearchService<R>
where
    R: AdvocateRepository,
{
    async fn run(
        &self,
        request: &SearchRequest,
    ) -> Result<Paginated<Advocate>, AdvocateRepositoryError> {
        let mut filter = build_predicates(&request.filters);

        if request.filters.requires_specialties() {
            let matches = self
                .repository
                .specialty_matches(&request.filters.specialties)
                .await?;
            let ids = resolve_specialty_ids(&request.filters.specialties, &matches);
            if ids.is_empty() {
                return Ok(Paginated::empty(request.page));
            }
            filter.push(AdvocatePredicate::IdIn(ids));
        }

        let total = self.repository.count_advocates(&filter).await?;
        let rows = self.repository.load_page(&filter, request.page).await?;
        Ok(Paginated::new(
            shape_advocates(rows),
            PaginationInfo::new(request.page, total),
        ))
    }
}

#[async_trait]
impl<R> AdvocateSearchQuery for AdvocateSearchService<R>
where
    R: AdvocateRepository,
{
    async fn search(&self, request: &SearchRequest) -> Result<Paginated<Advocate>, Error> {
        self.run(request).await.map_err(|err| {
            error!(
                filters = ?request.filters,
                page = request.page.page(),
                limit = request.page.limit(),
                offset = request.page.offset(),
                error = %err,
                "advocate search failed"
            );
            Error::internal(SEARCH_FAILURE_MESSAGE).with_diagnostic(err.to_string())
        })
    }
}
