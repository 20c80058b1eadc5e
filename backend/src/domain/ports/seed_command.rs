//! Driving port for reseeding the directory.

use async_trait::async_trait;

use crate::domain::Error;

use super::SeedSummary;

/// Use-case port that replaces the directory with freshly generated data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedCommand: Send + Sync {
    /// Reseed and report what was written.
    async fn seed(&self) -> Result<SeedSummary, Error>;
}

/// Fixture command reporting an empty run.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSeedCommand;

#[async_trait]
impl SeedCommand for FixtureSeedCommand {
    async fn seed(&self) -> Result<SeedSummary, Error> {
        Ok(SeedSummary::default())
    }
}
