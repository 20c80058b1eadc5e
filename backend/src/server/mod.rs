//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_ports;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{error, info};

use advocate_directory::Trace;
#[cfg(debug_assertions)]
use advocate_directory::doc::ApiDoc;
use advocate_directory::domain::ports::SeedCommand;
use advocate_directory::inbound::http::api_scope;
use advocate_directory::inbound::http::health::{HealthState, live, ready};
use advocate_directory::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

async fn seed_before_serving(seed: &dyn SeedCommand) -> std::io::Result<()> {
    match seed.seed().await {
        Ok(summary) => {
            info!(
                advocates = summary.advocates,
                specialties = summary.specialties,
                relationships = summary.relationships,
                "directory seeded on startup"
            );
            Ok(())
        }
        Err(err) => {
            error!(error = %err, diagnostic = ?err.diagnostic(), "startup seeding failed");
            Err(std::io::Error::other(format!("startup seeding failed: {err}")))
        }
    }
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// The directory is seeded first when [`ServerConfig::seeds_on_startup`]
/// says so; readiness is flagged once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding, binding the socket or starting
/// the server fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ports = build_http_ports(&config);
    if config.seeds_on_startup() {
        seed_before_serving(ports.seed.as_ref()).await?;
    }
    let http_state = web::Data::new(HttpState::new(ports, config.environment));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
