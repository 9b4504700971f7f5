//! The capability policy a namespace must satisfy before its workspace
//! is shown to a caller.

/// Resource group the default policy checks against.
pub const RESOURCE_GROUP: &str = "appstudio.redhat.com";

const RESOURCES: [&str; 2] = ["applications", "components"];
const VERBS: [&str; 4] = ["create", "list", "watch", "delete"];

/// One required capability: may the identity perform `verb` on
/// `resource` (in `group`) inside a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRequirement {
    pub group: String,
    pub resource: String,
    pub verb: String,
}

impl PolicyRequirement {
    pub fn new(
        group: impl Into<String>,
        resource: impl Into<String>,
        verb: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            resource: resource.into(),
            verb: verb.into(),
        }
    }
}

/// Ordered set of requirements, all of which must hold for a namespace
/// to be accessible. The order is fixed so that short-circuit behavior
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    requirements: Vec<PolicyRequirement>,
}

impl AccessPolicy {
    pub fn new(requirements: Vec<PolicyRequirement>) -> Self {
        Self { requirements }
    }

    pub fn requirements(&self) -> &[PolicyRequirement] {
        &self.requirements
    }
}

impl Default for AccessPolicy {
    /// The platform policy: every verb in {create, list, watch, delete}
    /// on both applications and components, verb-major order.
    fn default() -> Self {
        let mut requirements = Vec::with_capacity(VERBS.len() * RESOURCES.len());
        for verb in VERBS {
            for resource in RESOURCES {
                requirements.push(PolicyRequirement::new(RESOURCE_GROUP, resource, verb));
            }
        }
        Self { requirements }
    }
}
