use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::routes::scores::{ScoreAction, SCORES_PATH};
use crate::trace_ctx::UNKNOWN_TRACE_ID;

/// Emits one `request_completed` line per request, leveled by status class.
///
/// Requests to the scores resource also carry `score.action`, the action
/// their method dispatches to; other paths log `score.action = "-"`.
///
/// Expects `RequestTrace` to have stored the trace id already, so it must
/// be wrapped inside it: `.wrap(StructuredLogger).wrap(RequestTrace)`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What gets logged once the response status is known.
struct Completion {
    method: String,
    path: String,
    action: &'static str,
    trace_id: String,
    started: Instant,
}

impl Completion {
    fn from_request(req: &ServiceRequest) -> Self {
        let action = if req.path() == SCORES_PATH {
            ScoreAction::from_method(req.method()).as_str()
        } else {
            "-"
        };

        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            action,
            trace_id: req
                .extensions()
                .get::<String>()
                .cloned()
                .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string()),
            started: Instant::now(),
        }
    }

    fn log(&self, status: StatusCode) {
        let Completion {
            method,
            path,
            action,
            trace_id,
            started,
        } = self;
        let duration_us = started.elapsed().as_micros() as u64;
        let status_code = status.as_u16();

        if status.is_server_error() {
            error!(http.method = %method, url.path = %path, score.action = *action, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, url.path = %path, score.action = *action, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, score.action = *action, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let completion = Completion::from_request(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            completion.log(status);

            result
        })
    }
}
