use actix_web::{web, App, HttpServer};
use delegate_attendance::config::{EnvConfig, CONFIG};
use delegate_attendance::db::database_service::DatabaseService;
use delegate_attendance::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let db: Arc<DatabaseService> = DatabaseService::shared(&config.db_url)
        .await
        .map_err(std::io::Error::other)?;

    info!("Starting server on {} (report layout: {:?})", addr, config.report_layout);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
