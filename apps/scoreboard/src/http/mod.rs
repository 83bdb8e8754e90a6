//! HTTP-boundary helpers shared by routes, errors and middleware.

pub mod headers;
pub mod json_body;
