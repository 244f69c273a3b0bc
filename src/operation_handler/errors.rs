//! Error response rendering.
//!
//! Turns a [`ScimError`] into the HTTP response a client sees. Bodies are
//! plain text; store and internal failures never leak their detail.

use crate::ScimError;
use http::header::{ALLOW, CONTENT_TYPE};
use http::{HeaderValue, Response};

/// Create an error response from a ScimError.
pub fn create_error_response(error: &ScimError) -> Response<String> {
    let body = match error {
        ScimError::NotImplemented { .. } => String::new(),
        other => other.public_message(),
    };

    let has_body = !body.is_empty();
    let mut response = Response::new(body);
    *response.status_mut() = error.status_code();

    let headers = response.headers_mut();
    if has_body {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
    }
    if let ScimError::MethodNotAllowed { allow, .. } = error {
        if let Ok(value) = HeaderValue::from_str(allow) {
            headers.insert(ALLOW, value);
        }
    }

    response
}
