//! Workspace listing and lookup.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use wm_core::{assemble_workspaces, find_workspace, TenantSelector, WmError, Workspace, WorkspaceList};

use crate::error::ApiError;
use crate::handlers::{required_header, EMAIL_HEADER};
use crate::state::AppState;

/// GET /workspaces — every workspace the caller may see.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<WorkspaceList>, ApiError> {
    let identity = required_header(&headers, EMAIL_HEADER)?;
    tracing::info!(identity, "listing workspaces");

    let candidates = state
        .directory
        .list(&TenantSelector::all())
        .await
        .map_err(WmError::directory_unavailable)?;
    let allowed = state.resolver.resolve(&identity, candidates).await?;

    Ok(Json(assemble_workspaces(allowed)))
}

/// GET /workspaces/{name} — one workspace by exact name, 404 when the
/// caller may not see it.
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<Json<Workspace>, ApiError> {
    let identity = required_header(&headers, EMAIL_HEADER)?;
    tracing::info!(identity, workspace = %name, "fetching workspace");

    let candidates = state
        .directory
        .list(&TenantSelector::named(&name))
        .await
        .map_err(WmError::directory_unavailable)?;
    let allowed = state.resolver.resolve(&identity, candidates).await?;

    let list = assemble_workspaces(allowed);
    let workspace = find_workspace(&list, &name)?;
    Ok(Json(workspace))
}
