//! Static signup handlers for deployments without automatic
//! provisioning. Every caller reads as signed up.

use axum::Json;
use wm_core::Signup;

/// GET /api/v1/signup in dummy mode.
pub async fn check() -> Json<Signup> {
    Json(Signup::signed_up())
}

/// POST /api/v1/signup in dummy mode.
pub async fn create() -> &'static str {
    "ok"
}
