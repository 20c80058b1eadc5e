//! HTTP inbound adapter exposing REST endpoints.

pub mod advocates;
pub mod cache_control;
pub mod error;
pub mod health;
pub mod schemas;
pub mod seed;
pub mod specialties;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Versioned API routes: search, specialties and seeding.
///
/// Handlers read [`state::HttpState`] from app data, so the enclosing `App`
/// must register it.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(advocates::search_advocates)
        .service(specialties::list_specialties)
        .service(seed::seed_database)
}
