//! rusty-bbs/crates/rb-api/src/middleware.rs Middleware
//!
//! Access logging and response headers shared by every route.

use actix_web::middleware::{DefaultHeaders, Logger};

// Returns the access logger for the board.
pub fn standard_middleware() -> Logger {
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

// Headers added to every response unless a handler sets them itself.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
}
