//! Shared handler state.

use std::sync::Arc;

use wm_core::{AccessResolver, NamespaceDirectory, TenantProvisioner};

/// Client handles shared by all handlers. No mutable state lives here;
/// the external store is the single source of truth.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn NamespaceDirectory>,
    pub resolver: Arc<AccessResolver>,
    pub provisioner: Arc<TenantProvisioner>,
}
