mod model;
mod web;

use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::info;

use model::ModelManager;
use web::routes;

// The IDE integration expects the service at this fixed address.
const BIND_ADDR: (&str, u16) = ("0.0.0.0", 12000);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting BAGEL API server");

    // The mock model is always available; the flag it carries is what
    // /health reports.
    let manager = Data::new(ModelManager::new());
    info!("Mock model initialized (loaded: {})", manager.is_loaded());

    info!("Listening on {}:{}", BIND_ADDR.0, BIND_ADDR.1);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(manager.clone())
            .wrap(Cors::permissive())
            .configure(routes::configure)
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}
