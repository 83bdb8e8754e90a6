use actix_cors::Cors;
use actix_web::http::header;

/// Browser-facing CORS layer for the scoreboard.
///
/// Any origin may read the board. Pre-flight handling is disabled here so
/// every `OPTIONS` reaches the scores handler, which answers it with an
/// empty 200 whatever method or headers the browser asks about. This layer
/// only stamps the wildcard origin and exposed headers on actual responses.
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .disable_preflight()
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
}
