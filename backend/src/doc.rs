//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the advocate, specialty, seed and health endpoints
//! together with the schema wrappers from
//! [`crate::inbound::http::schemas`], so domain types stay free of utoipa.
//!
//! The document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    AdvocatePageSchema, AdvocateSchema, ErrorCodeSchema, ErrorSchema, PaginationInfoSchema,
};
use crate::inbound::http::seed::{SeedCounts, SeedFailureResponse, SeedResponse};
use crate::inbound::http::specialties::SpecialtiesResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Advocate directory API",
        description = "Search patient advocates by name, city, specialty and experience."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::advocates::search_advocates,
        crate::inbound::http::specialties::list_specialties,
        crate::inbound::http::seed::seed_database,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AdvocateSchema,
        AdvocatePageSchema,
        PaginationInfoSchema,
        ErrorSchema,
        ErrorCodeSchema,
        SpecialtiesResponse,
        SeedCounts,
        SeedResponse,
        SeedFailureResponse,
    )),
    tags(
        (name = "advocates", description = "Advocate search"),
        (name = "specialties", description = "Specialty catalogue"),
        (name = "seed", description = "Directory reseeding"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
