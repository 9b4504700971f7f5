//! In-memory cluster: one struct implementing all three client traits.
//! Backs dev mode and the HTTP tests; a real control-plane adapter
//! plugs in behind the same traits.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;
use wm_core::{
    AccessBinding, AccessReviewer, CandidateNamespace, NamespaceDirectory, PolicyRequirement,
    StoreError, TenantRecord, TenantSelector, TenantStore,
};

type Grant = (String, String, String, String, String);

/// Namespaces, role bindings and a grant table behind reader-writer
/// locks. Insertion order of namespaces is preserved so directory
/// listings are deterministic.
#[derive(Default)]
pub struct MemoryCluster {
    namespaces: RwLock<Vec<TenantRecord>>,
    bindings: RwLock<Vec<AccessBinding>>,
    /// (identity, namespace, group, resource, verb)
    grants: RwLock<HashSet<Grant>>,
}

impl MemoryCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a tenant namespace.
    pub fn add_namespace(&self, name: &str) {
        let mut labels = HashMap::new();
        labels.insert(
            wm_core::types::TENANT_LABEL.to_string(),
            wm_core::types::TENANT_LABEL_VALUE.to_string(),
        );
        labels.insert("kubernetes.io/metadata.name".to_string(), name.to_string());
        self.namespaces.write().push(TenantRecord {
            name: name.to_string(),
            labels,
            annotations: HashMap::new(),
        });
    }

    /// Grant one capability.
    pub fn grant(&self, identity: &str, namespace: &str, group: &str, resource: &str, verb: &str) {
        self.grants.write().insert((
            identity.to_string(),
            namespace.to_string(),
            group.to_string(),
            resource.to_string(),
            verb.to_string(),
        ));
    }

    /// Grant every requirement of the default policy in one namespace.
    pub fn grant_policy(&self, identity: &str, namespace: &str) {
        for requirement in wm_core::AccessPolicy::default().requirements() {
            self.grant(
                identity,
                namespace,
                &requirement.group,
                &requirement.resource,
                &requirement.verb,
            );
        }
    }

    /// Role bindings currently stored for a namespace.
    pub fn bindings_in(&self, namespace: &str) -> Vec<AccessBinding> {
        self.bindings
            .read()
            .iter()
            .filter(|binding| binding.namespace == namespace)
            .cloned()
            .collect()
    }

    /// Names of all stored namespaces, in insertion order.
    pub fn namespace_names(&self) -> Vec<String> {
        self.namespaces
            .read()
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    fn candidate(record: &TenantRecord) -> CandidateNamespace {
        CandidateNamespace {
            name: record.name.clone(),
            labels: record.labels.clone(),
        }
    }
}

#[async_trait]
impl NamespaceDirectory for MemoryCluster {
    async fn list(&self, selector: &TenantSelector) -> anyhow::Result<Vec<CandidateNamespace>> {
        Ok(self
            .namespaces
            .read()
            .iter()
            .map(Self::candidate)
            .filter(|candidate| selector.matches(candidate))
            .collect())
    }
}

#[async_trait]
impl AccessReviewer for MemoryCluster {
    async fn allowed(
        &self,
        identity: &str,
        namespace: &str,
        requirement: &PolicyRequirement,
    ) -> anyhow::Result<bool> {
        Ok(self.grants.read().contains(&(
            identity.to_string(),
            namespace.to_string(),
            requirement.group.clone(),
            requirement.resource.clone(),
            requirement.verb.clone(),
        )))
    }
}

#[async_trait]
impl TenantStore for MemoryCluster {
    async fn get_namespace(&self, name: &str) -> Result<TenantRecord, StoreError> {
        self.namespaces
            .read()
            .iter()
            .find(|record| record.name == name)
            .cloned()
            .ok_or_else(|| StoreError::not_found("namespace", name))
    }

    async fn create_namespace(&self, record: &TenantRecord) -> Result<(), StoreError> {
        let mut namespaces = self.namespaces.write();
        if namespaces.iter().any(|existing| existing.name == record.name) {
            return Err(StoreError::already_exists("namespace", &record.name));
        }
        namespaces.push(record.clone());
        Ok(())
    }

    async fn create_binding(&self, binding: &AccessBinding) -> Result<(), StoreError> {
        let mut bindings = self.bindings.write();
        if bindings
            .iter()
            .any(|existing| existing.namespace == binding.namespace && existing.name == binding.name)
        {
            return Err(StoreError::already_exists("rolebinding", &binding.name));
        }
        bindings.push(binding.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn directory_applies_the_selector() {
        let cluster = MemoryCluster::new();
        cluster.add_namespace("test-tenant");
        cluster.add_namespace("test-tenant-2");

        let all = cluster.list(&TenantSelector::all()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "test-tenant");

        let one = cluster
            .list(&TenantSelector::named("test-tenant-2"))
            .await
            .unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].name, "test-tenant-2");
    }

    #[tokio::test]
    async fn grants_answer_exact_tuples_only() {
        let cluster = MemoryCluster::new();
        cluster.grant("user1", "ns1", "appstudio.redhat.com", "applications", "create");

        let granted = PolicyRequirement::new("appstudio.redhat.com", "applications", "create");
        let other = PolicyRequirement::new("appstudio.redhat.com", "applications", "delete");

        assert!(cluster.allowed("user1", "ns1", &granted).await.unwrap());
        assert!(!cluster.allowed("user1", "ns1", &other).await.unwrap());
        assert!(!cluster.allowed("user2", "ns1", &granted).await.unwrap());
    }
}
