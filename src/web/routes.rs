use actix_web::web;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .route("/generate_code", web::post().to(handlers::generate_code))
        .route("/explain_code", web::post().to(handlers::explain_code))
        .route("/chat", web::post().to(handlers::chat))
        .route("/generate_image", web::post().to(handlers::generate_image));
}
