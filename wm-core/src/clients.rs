//! Client traits for the three external collaborators: the namespace
//! directory, the authorization oracle, and the object store used by
//! provisioning. The core only ever talks to the cluster through these.

use async_trait::async_trait;
use thiserror::Error;

use crate::policy::PolicyRequirement;
use crate::types::{AccessBinding, CandidateNamespace, TenantRecord, TENANT_LABEL, TENANT_LABEL_VALUE};

/// Name constraint applied on top of the fixed tenant label term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Any named tenant namespace.
    Any,
    /// Exactly one tenant namespace.
    Exactly(String),
}

/// Selector for tenant namespaces. Always carries the tenant label
/// term; constructors only add a name constraint on top of it. This is
/// the multi-tenancy boundary: there is no way to build a selector that
/// enumerates non-tenant namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantSelector {
    name: NameFilter,
}

impl TenantSelector {
    /// All tenant namespaces.
    pub fn all() -> Self {
        Self {
            name: NameFilter::Any,
        }
    }

    /// The tenant namespace with exactly this name, if any.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: NameFilter::Exactly(name.into()),
        }
    }

    pub fn name_filter(&self) -> &NameFilter {
        &self.name
    }

    /// The canonical interpretation of the selector, for directory
    /// implementations that filter in process.
    pub fn matches(&self, namespace: &CandidateNamespace) -> bool {
        let tenant = namespace.labels.get(TENANT_LABEL).map(String::as_str)
            == Some(TENANT_LABEL_VALUE);
        let named = match &self.name {
            NameFilter::Any => true,
            NameFilter::Exactly(name) => namespace.name == *name,
        };
        tenant && named
    }
}

/// Lists candidate tenant namespaces matching a selector.
#[async_trait]
pub trait NamespaceDirectory: Send + Sync {
    async fn list(&self, selector: &TenantSelector) -> anyhow::Result<Vec<CandidateNamespace>>;
}

/// Answers point-in-time "may `identity` perform this requirement's
/// verb on its resource inside `namespace`" queries. The decision
/// itself is delegated; the core only aggregates the answers.
#[async_trait]
pub trait AccessReviewer: Send + Sync {
    async fn allowed(
        &self,
        identity: &str,
        namespace: &str,
        requirement: &PolicyRequirement,
    ) -> anyhow::Result<bool>;
}

/// Typed store conditions the provisioner must tell apart. Anything
/// else is an infrastructure failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} {name:?} not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} {name:?} already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("store backend error: {source}")]
    Backend {
        #[from]
        source: anyhow::Error,
    },
}

impl StoreError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn already_exists(kind: &'static str, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    pub fn backend<E>(source: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Backend {
            source: source.into(),
        }
    }
}

/// Object store operations used by provisioning. `get_namespace` fails
/// with [`StoreError::NotFound`] when absent; the create operations
/// fail with [`StoreError::AlreadyExists`] on a name conflict.
#[async_trait]
pub trait TenantStore: Send + Sync {
    async fn get_namespace(&self, name: &str) -> Result<TenantRecord, StoreError>;

    async fn create_namespace(&self, record: &TenantRecord) -> Result<(), StoreError>;

    async fn create_binding(&self, binding: &AccessBinding) -> Result<(), StoreError>;
}
