//! Specialty catalogue endpoint.

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_one_hour_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Sorted specialty names.
#[derive(Debug, Serialize, ToSchema)]
pub struct SpecialtiesResponse {
    #[schema(example = json!(["ADHD", "Bipolar", "Chronic pain"]))]
    pub data: Vec<String>,
}

/// List every specialty name in alphabetical order.
#[utoipa::path(
    get,
    path = "/api/v1/specialties",
    responses(
        (status = 200, description = "Specialty names", body = SpecialtiesResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["specialties"],
    operation_id = "listSpecialties"
)]
#[get("/specialties")]
pub async fn list_specialties(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let data = state
        .specialties
        .list_specialties()
        .await
        .map_err(|err| state.present(err))?;
    Ok(HttpResponse::Ok()
        .insert_header(public_one_hour_header())
        .json(SpecialtiesResponse { data }))
}
