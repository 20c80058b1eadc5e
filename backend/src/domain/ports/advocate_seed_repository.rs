//! Driven port replacing the directory contents with a seed plan.

use async_trait::async_trait;

use crate::domain::SeedPlan;

use super::define_port_error;

define_port_error! {
    /// Errors raised while applying a seed plan.
    pub enum AdvocateSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "seed connection failed: {message}",
        /// A statement failed; the store rolled back.
        Query { message: String } =>
            "seed query failed: {message}",
        /// The plan references a specialty that is not part of it.
        InvalidPlan { message: String } =>
            "seed plan is inconsistent: {message}",
    }
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub advocates: usize,
    pub specialties: usize,
    pub relationships: usize,
}

/// Port replacing all advocates, specialties and associations atomically.
///
/// Not safe to run concurrently with search traffic: implementations delete
/// every row before inserting the plan.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvocateSeedRepository: Send + Sync {
    /// Delete associations, advocates and specialties, then insert `plan`.
    async fn replace_all(&self, plan: &SeedPlan)
    -> Result<SeedSummary, AdvocateSeedRepositoryError>;
}

/// Fixture that reports the plan's counts without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdvocateSeedRepository;

#[async_trait]
impl AdvocateSeedRepository for FixtureAdvocateSeedRepository {
    async fn replace_all(
        &self,
        plan: &SeedPlan,
    ) -> Result<SeedSummary, AdvocateSeedRepositoryError> {
        Ok(plan.summary())
    }
}

