//! Driving port for the specialty catalogue.

use async_trait::async_trait;

use crate::domain::Error;

/// Use-case port returning the sorted specialty names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialtiesQuery: Send + Sync {
    /// Sorted, distinct specialty names.
    async fn list_specialties(&self) -> Result<Vec<String>, Error>;
}

/// Fixture query with an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSpecialtiesQuery;

#[async_trait]
impl SpecialtiesQuery for FixtureSpecialtiesQuery {
    async fn list_specialties(&self) -> Result<Vec<String>, Error> {
        Ok(Vec::new())
    }
}
