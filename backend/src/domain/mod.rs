//! Domain primitives, services and ports.
//!
//! Purpose: describe advocates, search filters and the use cases that read
//! and reseed the directory, independent of HTTP and SQL. Adapters reach the
//! domain only through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - Advocate and friends: directory entries as stored and as returned.
//! - SearchRequest / SearchFilters / AdvocateFilter: parsed query inputs and
//!   the predicates derived from them.
//! - AdvocateSearchService, SpecialtiesService, SeedService: use cases.

pub mod error;
pub mod ports;
pub mod trace_id;

mod advocate;
mod advocate_search_service;
mod filters;
mod seed;
mod seed_service;
mod shaping;
mod specialties_service;
mod specialty_resolver;

pub use self::advocate::{
    Advocate, AdvocateId, AdvocateRecord, AdvocateSpecialtyRow, NewAdvocate,
};
pub use self::advocate_search_service::{AdvocateSearchService, SEARCH_FAILURE_MESSAGE};
pub use self::error::{Error, ErrorCode};
pub use self::filters::{
    AdvocateField, AdvocateFilter, AdvocatePredicate, ContainsPattern, SearchFilters,
    SearchRequest, build_predicates, parse_min_experience,
};
pub use self::seed::{SPECIALTY_NAMES, SeedAdvocate, SeedPlan};
pub use self::seed_service::{SEED_FAILURE_MESSAGE, SeedService};
pub use self::shaping::shape_advocates;
pub use self::specialties_service::{
    DEFAULT_SPECIALTIES_TTL, SPECIALTIES_CACHE_KEY, SPECIALTIES_CACHE_TAG,
    SPECIALTIES_FAILURE_MESSAGE, SpecialtiesService,
};
pub use self::specialty_resolver::{SpecialtyMatch, resolve_specialty_ids};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use advocate_directory::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
