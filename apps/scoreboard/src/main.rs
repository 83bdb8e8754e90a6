use actix_web::{web, App, HttpServer};
use scoreboard::config::db::sanitize_db_url;
use scoreboard::config::AppConfig;
use scoreboard::infra::state::build_state;
use scoreboard::middleware::cors::cors_middleware;
use scoreboard::middleware::request_trace::RequestTrace;
use scoreboard::middleware::structured_logger::StructuredLogger;
use scoreboard::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Resolved once; nothing below reads the environment again.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(config.database.clone()).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        database = %sanitize_db_url(config.database.url()),
        "starting scoreboard"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
