//! Error taxonomy for the workspace manager core.
//!
//! Policy denials and missing tenant records are normal outcomes and do
//! not appear here; this enum covers the conditions that abort a
//! request. The transport crate decides how each maps to a response.

use thiserror::Error;

/// A convenience result type for core APIs.
pub type WmResult<T> = std::result::Result<T, WmError>;

/// Fatal conditions surfaced by the core engine.
#[derive(Error, Debug)]
pub enum WmError {
    /// The caller-asserted identity header is absent or blank. The core
    /// requires it as input; authenticating it is the transport's job.
    #[error("caller identity is missing or blank")]
    MissingIdentity,

    /// An authorization check could not be completed. Fails the whole
    /// access-resolution request closed; no partial list is returned.
    #[error("authorization check failed: {source}")]
    OracleUnavailable {
        #[source]
        source: anyhow::Error,
    },

    /// Listing candidate namespaces failed.
    #[error("namespace directory lookup failed: {source}")]
    DirectoryUnavailable {
        #[source]
        source: anyhow::Error,
    },

    /// A read or write against the object store failed for a reason
    /// other than the recognized not-found/already-exists conditions.
    #[error("object store request failed: {source}")]
    StoreUnavailable {
        #[source]
        source: anyhow::Error,
    },

    /// Single-workspace lookup matched nothing the caller may see.
    #[error("workspace not found: {name}")]
    WorkspaceNotFound { name: String },
}

impl WmError {
    /// Wrap an oracle call failure.
    pub fn oracle_unavailable<E>(source: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::OracleUnavailable {
            source: source.into(),
        }
    }

    /// Wrap a directory listing failure.
    pub fn directory_unavailable<E>(source: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::DirectoryUnavailable {
            source: source.into(),
        }
    }

    /// Wrap an object store failure.
    pub fn store_unavailable<E>(source: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::StoreUnavailable {
            source: source.into(),
        }
    }

    /// Lookup error for a workspace the caller cannot see.
    pub fn workspace_not_found<S: Into<String>>(name: S) -> Self {
        Self::WorkspaceNotFound { name: name.into() }
    }
}
