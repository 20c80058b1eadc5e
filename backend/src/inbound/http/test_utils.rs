//! Test helpers for inbound HTTP components.

use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use serde_json::Value;

use super::api_scope;
use super::state::HttpState;

/// Send `request` through the `/api/v1` scope backed by `state` and decode
/// the JSON body.
pub async fn call_json(state: HttpState, request: test::TestRequest) -> (StatusCode, HeaderMap, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope()),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let headers = response.headers().clone();
    let body = test::read_body_json(response).await;
    (status, headers, body)
}
