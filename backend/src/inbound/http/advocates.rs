//! Advocate search endpoint.
//!
//! The raw query string is parsed by hand rather than through
//! `web::Query` so repeated `specialty` keys are all kept.

use actix_web::{HttpRequest, HttpResponse, get, web};
use url::form_urlencoded;
use utoipa::IntoParams;

use crate::domain::SearchRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::schemas::{AdvocatePageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by [`search_advocates`].
///
/// Integers are parsed leniently; unparseable values fall back to defaults
/// and an unparseable `experience` is ignored.
#[derive(IntoParams)]
#[into_params(parameter_in = Query)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI parameter generation via utoipa"
)]
pub struct AdvocateSearchParams {
    /// 1-based page index.
    #[param(example = 1)]
    page: Option<u32>,
    /// Page size, clamped to 1..=100.
    #[param(example = 25)]
    limit: Option<u32>,
    /// Free-text term matched against first name, last name, city and degree.
    search: Option<String>,
    /// Substring of the first or last name.
    name: Option<String>,
    /// Substring of the city.
    location: Option<String>,
    /// Required specialty substring; repeat to require several.
    specialty: Option<Vec<String>>,
    /// Minimum years of experience, inclusive.
    #[param(example = "5")]
    experience: Option<String>,
}

/// Search advocates with filters and pagination.
#[utoipa::path(
    get,
    path = "/api/v1/advocates",
    params(AdvocateSearchParams),
    responses(
        (status = 200, description = "Page of advocates", body = AdvocatePageSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["advocates"],
    operation_id = "searchAdvocates"
)]
#[get("/advocates")]
pub async fn search_advocates(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let request =
        SearchRequest::from_query_pairs(form_urlencoded::parse(req.query_string().as_bytes()));
    let page = state
        .advocates
        .search(&request)
        .await
        .map_err(|err| state.present(err))?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(page))
}
