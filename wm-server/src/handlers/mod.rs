//! Route handlers.

pub mod dummy;
pub mod signup;
pub mod workspaces;

use axum::http::HeaderMap;
use wm_core::WmError;

use crate::error::ApiError;

/// Header carrying the caller's asserted email identity.
pub const EMAIL_HEADER: &str = "x-email";
/// Header carrying the caller's asserted user id.
pub const USER_ID_HEADER: &str = "x-user";

/// Pull a required identity header. The transport in front of us is
/// responsible for authenticating it; absence or blankness here is a
/// precondition violation, never an empty-but-successful result.
pub fn required_header(headers: &HeaderMap, name: &str) -> Result<String, ApiError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or(ApiError(WmError::MissingIdentity))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
