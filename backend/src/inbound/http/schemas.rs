//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for the error envelope wrapping [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// HTTP reason phrase for the response status.
    #[schema(example = "Internal Server Error")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "internal_error")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Unable to retrieve advocates at this time. Please try again later.")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Underlying cause; only present in development deployments.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Advocate`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Advocate, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AdvocateSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "John")]
    first_name: String,
    #[schema(example = "Doe")]
    last_name: String,
    #[schema(example = "New York")]
    city: String,
    #[schema(example = "MD")]
    degree: String,
    #[schema(example = 10)]
    years_of_experience: i32,
    #[schema(example = 5_551_234_567_i64)]
    phone_number: i64,
    /// Specialty names ordered alphabetically.
    specialties: Vec<String>,
    #[schema(format = DateTime)]
    created_at: Option<String>,
    #[schema(format = DateTime)]
    updated_at: Option<String>,
}

/// OpenAPI schema for [`pagination::PaginationInfo`].
#[derive(ToSchema)]
#[schema(as = pagination::PaginationInfo, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaginationInfoSchema {
    #[schema(example = 1)]
    page: u32,
    #[schema(example = 25)]
    limit: u32,
    #[schema(example = 15)]
    total_count: u64,
    #[schema(example = 1)]
    total_pages: u64,
    has_next_page: bool,
    has_previous_page: bool,
}

/// OpenAPI schema for a page of advocates.
#[derive(ToSchema)]
#[schema(as = AdvocatePage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AdvocatePageSchema {
    data: Vec<AdvocateSchema>,
    pagination: PaginationInfoSchema,
}
