//! Driven port for reading advocates from the store.
//!
//! The search service composes these three calls; adapters only translate
//! predicates into their query language and rows back into domain types.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{AdvocateFilter, AdvocateSpecialtyRow, ContainsPattern, SpecialtyMatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by advocate read adapters.
    pub enum AdvocateRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "advocate store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "advocate store query failed: {message}",
    }
}

/// Port for advocate search reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvocateRepository: Send + Sync {
    /// Return every advocate/specialty association whose specialty name
    /// matches at least one of `patterns`.
    async fn specialty_matches(
        &self,
        patterns: &[ContainsPattern],
    ) -> Result<Vec<SpecialtyMatch>, AdvocateRepositoryError>;

    /// Count advocates satisfying `filter`.
    async fn count_advocates(&self, filter: &AdvocateFilter)
    -> Result<u64, AdvocateRepositoryError>;

    /// Load one page of advocates satisfying `filter`, ordered by id
    /// ascending, joined to their specialties.
    ///
    /// Pagination applies to advocates, not joined rows. Advocates without
    /// specialties yield a single row with no specialty.
    async fn load_page(
        &self,
        filter: &AdvocateFilter,
        page: PageRequest,
    ) -> Result<Vec<AdvocateSpecialtyRow>, AdvocateRepositoryError>;
}

/// Fixture repository holding no advocates.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdvocateRepository;

#[async_trait]
impl AdvocateRepository for FixtureAdvocateRepository {
    async fn specialty_matches(
        &self,
        _patterns: &[ContainsPattern],
    ) -> Result<Vec<SpecialtyMatch>, AdvocateRepositoryError> {
        Ok(Vec::new())
    }

    async fn count_advocates(
        &self,
        _filter: &AdvocateFilter,
    ) -> Result<u64, AdvocateRepositoryError> {
        Ok(0)
    }

    async fn load_page(
        &self,
        _filter: &AdvocateFilter,
        _page: PageRequest,
    ) -> Result<Vec<AdvocateSpecialtyRow>, AdvocateRepositoryError> {
        Ok(Vec::new())
    }
}
