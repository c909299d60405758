//! # Middleware
//!
//! Standard middleware set for the Social Sphere API.

use actix_cors::Cors;
use actix_web::middleware::Logger;

/// Returns the request logger used in front of every route.
/// Output: remote-ip "request-line" status-code response-size "referrer" "user-agent"
pub fn standard_middleware() -> Logger {
    Logger::default()
}

/// Configures CORS (Cross-Origin Resource Sharing).
/// The browser UI and this API may live on different origins.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_header()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .max_age(3600)
}
