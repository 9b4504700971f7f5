//! Core domain and wire types for the workspace manager.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// API group/version stamped on workspace wire objects.
pub const WORKSPACE_API_VERSION: &str = "toolchain.dev.openshift.com/v1alpha1";

/// Label key marking a namespace as a tenant namespace.
pub const TENANT_LABEL: &str = "konflux.ci/type";
/// Label value marking a namespace as a user tenant namespace.
pub const TENANT_LABEL_VALUE: &str = "user";

/// Annotation carrying the requester's email on a tenant namespace.
pub const REQUESTER_EMAIL_ANNOTATION: &str = "konflux-ci.dev/requester-email";
/// Annotation carrying the requester's user id on a tenant namespace.
pub const REQUESTER_USER_ID_ANNOTATION: &str = "konflux-ci.dev/requester-user-id";

/// Name of the role binding granting the requester admin access to its
/// own tenant namespace.
pub const ADMIN_BINDING_NAME: &str = "konflux-init-admin";
/// Cluster role referenced by the initial admin binding.
pub const ADMIN_CLUSTER_ROLE: &str = "konflux-admin-user-actions";

/// Member namespace type used for all workspace members.
pub const DEFAULT_NAMESPACE_TYPE: &str = "default";

/// One tenant-namespace candidate under consideration, as returned by
/// the directory. Immutable snapshot; never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNamespace {
    pub name: String,
    pub labels: HashMap<String, String>,
}

impl CandidateNamespace {
    /// A candidate carrying the tenant label, for construction in tests
    /// and in-memory directories.
    pub fn tenant(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut labels = HashMap::new();
        labels.insert(TENANT_LABEL.to_string(), TENANT_LABEL_VALUE.to_string());
        labels.insert("kubernetes.io/metadata.name".to_string(), name.clone());
        Self { name, labels }
    }
}

/// Object metadata subset carried on workspace wire objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One member namespace of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceNamespace {
    pub name: String,
    #[serde(rename = "type")]
    pub namespace_type: String,
}

/// Status of a workspace: its member namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceStatus {
    pub namespaces: Vec<SpaceNamespace>,
}

/// Caller-facing view of one accessible tenant namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub status: WorkspaceStatus,
}

impl Workspace {
    /// Project a namespace into its workspace view: one workspace per
    /// namespace, the namespace named as the single member.
    pub fn for_namespace(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: "Workspace".to_string(),
            api_version: WORKSPACE_API_VERSION.to_string(),
            metadata: ObjectMeta {
                name: Some(name.clone()),
            },
            status: WorkspaceStatus {
                namespaces: vec![SpaceNamespace {
                    name,
                    namespace_type: DEFAULT_NAMESPACE_TYPE.to_string(),
                }],
            },
        }
    }

    /// Workspace name, equal to its single member namespace's name.
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }
}

/// List of workspaces visible to the calling identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceList {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub items: Vec<Workspace>,
}

impl WorkspaceList {
    pub fn new(items: Vec<Workspace>) -> Self {
        Self {
            kind: "WorkspaceList".to_string(),
            api_version: WORKSPACE_API_VERSION.to_string(),
            metadata: ObjectMeta::default(),
            items,
        }
    }
}

/// Reason reported alongside the signup readiness flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupReason {
    SignedUp,
    NotSignedUp,
}

/// Signup readiness for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupStatus {
    pub ready: bool,
    pub reason: SignupReason,
}

/// Wire shape of the signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub status: SignupStatus,
}

impl Signup {
    pub fn signed_up() -> Self {
        Self {
            status: SignupStatus {
                ready: true,
                reason: SignupReason::SignedUp,
            },
        }
    }

    pub fn not_signed_up() -> Self {
        Self {
            status: SignupStatus {
                ready: false,
                reason: SignupReason::NotSignedUp,
            },
        }
    }
}

/// The externally stored tenant namespace object, keyed by canonical
/// name. Created once per identity; re-creation is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantRecord {
    pub name: String,
    pub labels: HashMap<String, String>,
    pub annotations: HashMap<String, String>,
}

impl TenantRecord {
    /// Build the record for an identity: canonical name, tenant label,
    /// requester annotations.
    pub fn for_identity(email: &str, user_id: &str) -> Self {
        let mut labels = HashMap::new();
        labels.insert(TENANT_LABEL.to_string(), TENANT_LABEL_VALUE.to_string());

        let mut annotations = HashMap::new();
        annotations.insert(REQUESTER_EMAIL_ANNOTATION.to_string(), email.to_string());
        annotations.insert(REQUESTER_USER_ID_ANNOTATION.to_string(), user_id.to_string());

        Self {
            name: crate::naming::normalize_identity(email),
            labels,
            annotations,
        }
    }
}

/// Role binding granting one identity admin capabilities scoped to its
/// own tenant namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessBinding {
    pub name: String,
    pub namespace: String,
    pub subject: String,
    pub cluster_role: String,
}

impl AccessBinding {
    /// The initial admin binding created right after the namespace.
    pub fn initial_admin(namespace: &str, subject: &str) -> Self {
        Self {
            name: ADMIN_BINDING_NAME.to_string(),
            namespace: namespace.to_string(),
            subject: subject.to_string(),
            cluster_role: ADMIN_CLUSTER_ROLE.to_string(),
        }
    }
}
