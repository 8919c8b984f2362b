// src/api/mod.rs
use actix_web::{error, web, App, HttpResponse, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationRequest;
use self::types::ErrorResponse;

pub mod types;
pub mod routes;
pub mod handlers;

/// Shared by every worker; the generator holds no mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub generator: PasswordGenerator,
    pub defaults: GenerationRequest,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: PasswordGenerator::new(config.character_sets()),
            defaults: config.default_request(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::GeneratePasswordRequest,
            crate::api::types::GeneratePasswordResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "System status")
    ),
    info(
        title = "PassGen API",
        version = "0.1.0",
        description = "Cryptographically secure password generator",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// JSON extractor config that answers decode failures in the API's error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(4096)
        .error_handler(|err, _req| {
            log::debug!("Malformed request body: {}", err);
            let response = HttpResponse::BadRequest().json(ErrorResponse::new(
                format!("Invalid request body: {}", err),
                "MALFORMED_REQUEST",
            ));
            error::InternalError::from_response(err, response).into()
        })
}

pub async fn start_server(config: &Config) -> std::io::Result<()> {
    let (address, port) = config.bind_address();
    log::info!("Starting PassGen API server on {}:{}", address, port);

    let state = web::Data::new(AppState::from_config(config));
    log::debug!(
        "Symbol alphabet: {}",
        state.generator.character_sets().symbols().iter().collect::<String>()
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
