//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::ports::{
    AdvocateSearchQuery, FixtureAdvocateSearchQuery, FixtureSeedCommand,
    FixtureSpecialtiesQuery, SeedCommand, SpecialtiesQuery,
};
use crate::settings::Environment;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub advocates: Arc<dyn AdvocateSearchQuery>,
    pub specialties: Arc<dyn SpecialtiesQuery>,
    pub seed: Arc<dyn SeedCommand>,
}

impl HttpStatePorts {
    /// Ports backed by the inert fixture implementations.
    pub fn fixtures() -> Self {
        Self {
            advocates: Arc::new(FixtureAdvocateSearchQuery),
            specialties: Arc::new(FixtureSpecialtiesQuery),
            seed: Arc::new(FixtureSeedCommand),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub advocates: Arc<dyn AdvocateSearchQuery>,
    pub specialties: Arc<dyn SpecialtiesQuery>,
    pub seed: Arc<dyn SeedCommand>,
    environment: Environment,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports, Environment::default())
    }
}

impl HttpState {
    /// Construct state from a ports bundle for the given deployment flavour.
    ///
    /// # Examples
    /// ```
    /// use advocate_directory::inbound::http::state::{HttpState, HttpStatePorts};
    /// use advocate_directory::settings::Environment;
    ///
    /// let state = HttpState::new(HttpStatePorts::fixtures(), Environment::Development);
    /// assert_eq!(state.environment(), Environment::Development);
    /// ```
    pub fn new(ports: HttpStatePorts, environment: Environment) -> Self {
        let HttpStatePorts {
            advocates,
            specialties,
            seed,
        } = ports;
        Self {
            advocates,
            specialties,
            seed,
            environment,
        }
    }

    /// Deployment flavour the handlers render errors for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Prepare a use-case error for the client, attaching the diagnostic
    /// cause in development.
    pub fn present(&self, error: Error) -> Error {
        if self.environment.exposes_diagnostics() {
            error.expose_diagnostic()
        } else {
            error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Environment::Development, Some(json!("pool timed out")))]
    #[case(Environment::Production, None)]
    fn diagnostics_are_exposed_only_in_development(
        #[case] environment: Environment,
        #[case] expected: Option<serde_json::Value>,
    ) {
        let state = HttpState::new(HttpStatePorts::fixtures(), environment);
        let error = Error::internal("Unable to load").with_diagnostic("pool timed out");

        let presented = state.present(error);
        assert_eq!(presented.details(), expected.as_ref());
        assert_eq!(presented.message(), "Unable to load");
    }
}
