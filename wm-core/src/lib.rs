//! wm-core: framework-agnostic core for the workspace manager.
//!
//! Answers two questions for a multi-tenant cluster: which tenant
//! namespaces may a calling identity see (access resolution), and does
//! the identity own a provisioned tenant namespace (signup). The HTTP
//! layer lives in `wm-server`; the cluster itself is reached through
//! the client traits in [`clients`].

pub mod access;
pub mod clients;
pub mod errors;
pub mod naming;
pub mod policy;
pub mod provision;
pub mod types;
pub mod workspace;

pub use access::AccessResolver;
pub use clients::{
    AccessReviewer, NameFilter, NamespaceDirectory, StoreError, TenantSelector, TenantStore,
};
pub use errors::{WmError, WmResult};
pub use naming::normalize_identity;
pub use policy::{AccessPolicy, PolicyRequirement};
pub use provision::{SignupState, TenantProvisioner};
pub use types::{
    AccessBinding, CandidateNamespace, Signup, SignupReason, SignupStatus, SpaceNamespace,
    TenantRecord, Workspace, WorkspaceList, WorkspaceStatus,
};
pub use workspace::{assemble_workspaces, find_workspace};
