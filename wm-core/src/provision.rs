//! Tenant provisioning: existence check plus idempotent creation of a
//! tenant namespace and its initial admin binding.

use std::sync::Arc;

use crate::clients::{StoreError, TenantStore};
use crate::errors::{WmError, WmResult};
use crate::naming::normalize_identity;
use crate::types::{AccessBinding, TenantRecord};

/// Outcome of the existence check for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupState {
    SignedUp,
    NotSignedUp,
}

/// Orchestrates signup against the object store. Holds no state of its
/// own; the store is the single source of truth.
pub struct TenantProvisioner {
    store: Arc<dyn TenantStore>,
}

impl TenantProvisioner {
    pub fn new(store: Arc<dyn TenantStore>) -> Self {
        Self { store }
    }

    /// Does the identity already own a provisioned tenant namespace?
    /// A missing record is a normal outcome, not an error.
    pub async fn signup_state(&self, identity: &str) -> WmResult<SignupState> {
        if identity.trim().is_empty() {
            return Err(WmError::MissingIdentity);
        }

        let name = normalize_identity(identity);
        match self.store.get_namespace(&name).await {
            Ok(_) => Ok(SignupState::SignedUp),
            Err(StoreError::NotFound { .. }) => Ok(SignupState::NotSignedUp),
            Err(err) => Err(WmError::store_unavailable(err)),
        }
    }

    /// Create the tenant namespace and its initial admin binding,
    /// returning the canonical namespace name. Both steps treat an
    /// already-existing object as success, so repeated and concurrent
    /// calls for the same identity converge on exactly one record each.
    ///
    /// The two writes are sequential and not transactional. If the
    /// binding write fails after the namespace write succeeded, the
    /// next identical call finds the namespace already provisioned and
    /// retries only the binding.
    pub async fn provision(&self, email: &str, user_id: &str) -> WmResult<String> {
        if email.trim().is_empty() || user_id.trim().is_empty() {
            return Err(WmError::MissingIdentity);
        }

        let record = TenantRecord::for_identity(email, user_id);
        let name = record.name.clone();
        tracing::info!(namespace = %name, email, "provisioning tenant namespace");

        match self.store.create_namespace(&record).await {
            Ok(()) => {}
            Err(StoreError::AlreadyExists { .. }) => {
                tracing::info!(namespace = %name, "tenant namespace already exists");
            }
            Err(err) => {
                tracing::error!(namespace = %name, error = %err, "failed to create tenant namespace");
                return Err(WmError::store_unavailable(err));
            }
        }

        let binding = AccessBinding::initial_admin(&name, email);
        match self.store.create_binding(&binding).await {
            Ok(()) => {}
            Err(StoreError::AlreadyExists { .. }) => {
                tracing::warn!(namespace = %name, "initial admin binding already exists");
            }
            Err(err) => {
                tracing::error!(namespace = %name, error = %err, "failed to create initial admin binding");
                return Err(WmError::store_unavailable(err));
            }
        }

        Ok(name)
    }
}
