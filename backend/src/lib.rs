//! Advocate directory service library.
//!
//! Hexagonal layout: [`domain`] holds entities, search rules and ports;
//! [`outbound`] adapts them to PostgreSQL and in-process stores;
//! [`inbound`] exposes them over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
