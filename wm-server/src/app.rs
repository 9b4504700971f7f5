//! Router assembly.

use axum::{routing::get, Router};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, dummy, signup, workspaces};
use crate::state::AppState;

/// Build the service router. `provision_enabled` selects the real
/// provisioner-backed signup handlers over the static dummy ones.
///
/// Trailing-slash trimming must wrap the router rather than sit in its
/// layer stack: router layers run after the route has already been
/// matched.
pub fn router(state: AppState, provision_enabled: bool) -> NormalizePath<Router> {
    let signup_routes = if provision_enabled {
        get(signup::check).post(signup::create)
    } else {
        get(dummy::check).post(dummy::create)
    };

    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/workspaces", get(workspaces::list))
        .route("/workspaces/{name}", get(workspaces::get))
        .route("/api/v1/signup", signup_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
