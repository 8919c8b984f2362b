// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // POST: Generate a password
            .route("/generate-password", web::post().to(handlers::generator::generate_password))
            // GET: Liveness
            .route("/health", web::get().to(handlers::system::health))
    );
}
