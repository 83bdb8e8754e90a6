use actix_web::web;

pub mod health;
pub mod scores;

/// Register every route of the service.
///
/// `main.rs` wraps these in the CORS, tracing and logging middleware; tests
/// register them bare so endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Scoreboard: /api/scores (method selects the action)
    scores::configure_routes(cfg);
}
