use hyper::{
    header::{HeaderName, HeaderValue},
    HeaderMap,
};

#[cfg(test)]
mod tests;

/// Allows cross-origin calls from any origin. The gateway is GET-only, so
/// the method list stays short.
pub fn add_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static("*"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}
