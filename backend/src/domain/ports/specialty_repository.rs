//! Driven port listing the specialty catalogue.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while reading specialties.
    pub enum SpecialtyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "specialty store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "specialty store query failed: {message}",
    }
}

/// Port for reading specialty names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    /// Every specialty name, sorted ascending.
    async fn list_specialty_names(&self) -> Result<Vec<String>, SpecialtyRepositoryError>;
}

/// Fixture repository with an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSpecialtyRepository;

#[async_trait]
impl SpecialtyRepository for FixtureSpecialtyRepository {
    async fn list_specialty_names(&self) -> Result<Vec<String>, SpecialtyRepositoryError> {
        Ok(Vec::new())
    }
}
