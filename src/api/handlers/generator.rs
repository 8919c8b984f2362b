// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, error};

use crate::api::types::{ErrorResponse, GeneratePasswordRequest, GeneratePasswordResponse};
use crate::api::AppState;

/// Generate a secure password
///
/// Validates the options, then builds a password containing at least one
/// character from every selected class.
#[utoipa::path(
    post,
    path = "/api/generate-password",
    tag = "Generator",
    request_body = GeneratePasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = GeneratePasswordResponse),
        (status = 400, description = "Invalid options or malformed body", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    body: web::Json<GeneratePasswordRequest>,
) -> impl Responder {
    let request = body.into_inner().into_request(&state.defaults);
    debug!(
        "Generation requested: length={} upper={} lower={} numbers={} symbols={}",
        request.length,
        request.include_uppercase,
        request.include_lowercase,
        request.include_numbers,
        request.include_symbols
    );

    let valid = match state.generator.validate(&request) {
        Ok(valid) => valid,
        Err(e) => {
            debug!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string(), e.code()));
        }
    };

    let password = match state.generator.generate(&valid) {
        Ok(password) => password,
        Err(e) if e.is_user_error() => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string(), e.code()));
        }
        Err(e) => {
            error!("Password generation failed: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Internal server error", e.code()));
        }
    };

    HttpResponse::Ok().json(GeneratePasswordResponse::new(password, state.generator.pool_size(&valid)))
}
