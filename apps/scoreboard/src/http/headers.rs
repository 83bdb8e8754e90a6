//! Header values the scoreboard endpoint puts on its responses.

/// `Access-Control-Allow-Origin` value carried by every response.
pub const ANY_ORIGIN: &str = "*";

/// Methods advertised to browsers in a pre-flight response.
pub const PREFLIGHT_ALLOW_METHODS: &str = "GET, POST, PUT, OPTIONS";

/// Request headers browsers may send cross-origin.
pub const PREFLIGHT_ALLOW_HEADERS: &str = "Content-Type";

/// How long browsers may cache a pre-flight result.
pub const PREFLIGHT_MAX_AGE_SECS: usize = 86_400;

/// Methods the scores endpoint actually serves; sent as `Allow` on 405.
pub const SERVED_METHODS: &str = "GET, POST, OPTIONS";
