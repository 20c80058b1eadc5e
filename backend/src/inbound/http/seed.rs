//! Database seeding endpoint.
//!
//! Unlike the read endpoints this one reports outcomes in a
//! `{success, ...}` body, including on failure.

use actix_web::{HttpResponse, ResponseError, post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::TRACE_ID_HEADER;
use crate::domain::ports::SeedSummary;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::state::HttpState;

const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

/// Row counts written by a seed run.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedCounts {
    #[schema(example = 15)]
    pub advocates: usize,
    #[schema(example = 26)]
    pub specialties: usize,
    #[schema(example = 30)]
    pub relationships: usize,
}

impl From<SeedSummary> for SeedCounts {
    fn from(summary: SeedSummary) -> Self {
        Self {
            advocates: summary.advocates,
            specialties: summary.specialties,
            relationships: summary.relationships,
        }
    }
}

/// Successful seed response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Database seeded successfully")]
    pub message: String,
    pub data: SeedCounts,
}

/// Failed seed response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedFailureResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Failed to seed database")]
    pub error: String,
    /// Underlying cause; only present in development deployments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Replace the directory contents with freshly generated data.
#[utoipa::path(
    post,
    path = "/api/v1/seed",
    responses(
        (status = 200, description = "Database seeded", body = SeedResponse),
        (status = 500, description = "Seeding failed", body = SeedFailureResponse)
    ),
    tags = ["seed"],
    operation_id = "seedDatabase"
)]
#[post("/seed")]
pub async fn seed_database(state: web::Data<HttpState>) -> HttpResponse {
    match state.seed.seed().await {
        Ok(summary) => HttpResponse::Ok()
            .insert_header(private_no_cache_header())
            .json(SeedResponse {
                success: true,
                message: SEED_SUCCESS_MESSAGE.to_owned(),
                data: summary.into(),
            }),
        Err(err) => {
            let err = state.present(err);
            let mut builder = HttpResponse::build(err.status_code());
            builder.insert_header(private_no_cache_header());
            if let Some(id) = err.trace_id() {
                builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
            }
            builder.json(SeedFailureResponse {
                success: false,
                error: err.message().to_owned(),
                details: err.details().cloned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::ports::{MockSeedCommand, SeedSummary};
    use crate::domain::{Error, SEED_FAILURE_MESSAGE};
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::call_json;
    use crate::settings::Environment;

    fn state_with(command: MockSeedCommand, environment: Environment) -> HttpState {
        HttpState::new(
            HttpStatePorts {
                seed: Arc::new(command),
                ..HttpStatePorts::fixtures()
            },
            environment,
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn reports_seeded_counts() {
        let mut command = MockSeedCommand::new();
        command.expect_seed().times(1).returning(|| {
            Ok(SeedSummary {
                advocates: 15,
                specialties: 26,
                relationships: 31,
            })
        });

        let (status, _, body) = call_json(
            state_with(command, Environment::Production),
            TestRequest::post().uri("/api/v1/seed"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Database seeded successfully",
                "data": {"advocates": 15, "specialties": 26, "relationships": 31},
            })
        );
    }

    #[rstest]
    #[case(Environment::Production, json!({"success": false, "error": SEED_FAILURE_MESSAGE}))]
    #[case(
        Environment::Development,
        json!({"success": false, "error": SEED_FAILURE_MESSAGE, "details": "deadlock detected"})
    )]
    #[actix_web::test]
    async fn failures_report_success_false(
        #[case] environment: Environment,
        #[case] expected: serde_json::Value,
    ) {
        let mut command = MockSeedCommand::new();
        command.expect_seed().times(1).returning(|| {
            Err(Error::internal(SEED_FAILURE_MESSAGE).with_diagnostic("deadlock detected"))
        });

        let (status, _, body) = call_json(
            state_with(command, environment),
            TestRequest::post().uri("/api/v1/seed"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, expected);
    }
}
