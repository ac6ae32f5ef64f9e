//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows requests from any origin with any method and headers.
///
/// Credentials are never allowed with the wildcard origin.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
