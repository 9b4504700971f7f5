//! Provisioner-backed signup endpoints.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use wm_core::{Signup, SignupState};

use crate::error::ApiError;
use crate::handlers::{required_header, EMAIL_HEADER, USER_ID_HEADER};
use crate::state::AppState;

/// GET /api/v1/signup — is the caller already provisioned? A missing
/// record answers 404 not-signed-up; that is a normal outcome.
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let email = required_header(&headers, EMAIL_HEADER)?;
    tracing::info!(email, "checking signup state");

    let response = match state.provisioner.signup_state(&email).await? {
        SignupState::SignedUp => (StatusCode::OK, Json(Signup::signed_up())),
        SignupState::NotSignedUp => (StatusCode::NOT_FOUND, Json(Signup::not_signed_up())),
    };
    Ok(response)
}

/// POST /api/v1/signup — provision the caller's tenant namespace and
/// initial admin binding. Safe to call repeatedly.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<String, ApiError> {
    let email = required_header(&headers, EMAIL_HEADER)?;
    let user_id = required_header(&headers, USER_ID_HEADER)?;

    let name = state.provisioner.provision(&email, &user_id).await?;
    Ok(format!(
        "namespace creation request for {name} was completed successfully"
    ))
}
