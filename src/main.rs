use actix_web::{web, App, HttpServer};
use signet_auth::config::{EnvConfig, CONFIG};
use signet_auth::db::postgres_service::PostgresService;
use signet_auth::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    CONFIG
        .set(EnvConfig::from_env())
        .expect("Config already initialized");
    let config = signet_auth::config::config();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
