//! Access aggregation: which candidate namespaces does an identity hold
//! every required capability in.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::clients::AccessReviewer;
use crate::errors::{WmError, WmResult};
use crate::policy::AccessPolicy;
use crate::types::CandidateNamespace;

/// Upper bound on namespaces being evaluated at once. Checks within a
/// namespace stay sequential so a denial short-circuits them.
const MAX_IN_FLIGHT: usize = 8;

/// Filters candidate namespaces down to those for which an identity
/// satisfies the full access policy.
pub struct AccessResolver {
    oracle: Arc<dyn AccessReviewer>,
    policy: AccessPolicy,
}

impl AccessResolver {
    /// Resolver with the default platform policy.
    pub fn new(oracle: Arc<dyn AccessReviewer>) -> Self {
        Self {
            oracle,
            policy: AccessPolicy::default(),
        }
    }

    /// Replace the policy, for other resource/verb combinations.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep the candidates for which `identity` passes every policy
    /// requirement. Stable filter: the output is a subsequence of the
    /// input in input order. Any oracle call failure aborts the whole
    /// resolution; a partial list is never returned.
    pub async fn resolve(
        &self,
        identity: &str,
        candidates: Vec<CandidateNamespace>,
    ) -> WmResult<Vec<CandidateNamespace>> {
        if identity.trim().is_empty() {
            return Err(WmError::MissingIdentity);
        }

        let decisions: Vec<Option<CandidateNamespace>> =
            stream::iter(candidates.into_iter().map(|ns| self.evaluate(identity, ns)))
                .buffered(MAX_IN_FLIGHT)
                .try_collect()
                .await?;

        Ok(decisions.into_iter().flatten().collect())
    }

    /// AND-reduce the policy over one namespace, stopping at the first
    /// denied requirement.
    async fn evaluate(
        &self,
        identity: &str,
        namespace: CandidateNamespace,
    ) -> WmResult<Option<CandidateNamespace>> {
        for requirement in self.policy.requirements() {
            let allowed = self
                .oracle
                .allowed(identity, &namespace.name, requirement)
                .await
                .map_err(WmError::oracle_unavailable)?;

            if !allowed {
                tracing::debug!(
                    namespace = %namespace.name,
                    resource = %requirement.resource,
                    verb = %requirement.verb,
                    "namespace denied"
                );
                return Ok(None);
            }
        }
        Ok(Some(namespace))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use crate::policy::PolicyRequirement;

    /// Oracle backed by an explicit grant table, recording every call.
    #[derive(Default)]
    struct TableOracle {
        grants: HashSet<(String, String, String, String)>,
        calls: Mutex<Vec<(String, String, String)>>,
        fail_on_namespace: Option<String>,
    }

    impl TableOracle {
        fn grant_all(&mut self, identity: &str, namespace: &str) {
            for requirement in AccessPolicy::default().requirements() {
                self.grants.insert((
                    identity.to_string(),
                    namespace.to_string(),
                    requirement.resource.clone(),
                    requirement.verb.clone(),
                ));
            }
        }

        fn calls_for(&self, namespace: &str) -> usize {
            self.calls
                .lock()
                .iter()
                .filter(|(ns, _, _)| ns == namespace)
                .count()
        }
    }

    #[async_trait]
    impl AccessReviewer for TableOracle {
        async fn allowed(
            &self,
            identity: &str,
            namespace: &str,
            requirement: &PolicyRequirement,
        ) -> anyhow::Result<bool> {
            if self.fail_on_namespace.as_deref() == Some(namespace) {
                anyhow::bail!("authorization backend unreachable");
            }
            self.calls.lock().push((
                namespace.to_string(),
                requirement.resource.clone(),
                requirement.verb.clone(),
            ));
            Ok(self.grants.contains(&(
                identity.to_string(),
                namespace.to_string(),
                requirement.resource.clone(),
                requirement.verb.clone(),
            )))
        }
    }

    fn candidates(names: &[&str]) -> Vec<CandidateNamespace> {
        names.iter().map(|name| CandidateNamespace::tenant(*name)).collect()
    }

    #[tokio::test]
    async fn keeps_only_fully_granted_namespaces() {
        let mut oracle = TableOracle::default();
        oracle.grant_all("user1", "test-tenant");
        let resolver = AccessResolver::new(Arc::new(oracle));

        let out = resolver
            .resolve("user1", candidates(&["test-tenant", "test-tenant-2"]))
            .await
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "test-tenant");
    }

    #[tokio::test]
    async fn output_preserves_input_order() {
        let mut oracle = TableOracle::default();
        for ns in ["ns-c", "ns-a", "ns-b"] {
            oracle.grant_all("user1", ns);
        }
        let resolver = AccessResolver::new(Arc::new(oracle));

        let out = resolver
            .resolve("user1", candidates(&["ns-c", "ns-a", "ns-b"]))
            .await
            .unwrap();

        let names: Vec<&str> = out.iter().map(|ns| ns.name.as_str()).collect();
        assert_eq!(names, ["ns-c", "ns-a", "ns-b"]);
    }

    #[tokio::test]
    async fn single_denial_excludes_a_namespace() {
        let mut oracle = TableOracle::default();
        oracle.grant_all("user1", "test-tenant");
        // Revoke one requirement out of eight.
        oracle.grants.remove(&(
            "user1".to_string(),
            "test-tenant".to_string(),
            "components".to_string(),
            "delete".to_string(),
        ));
        let resolver = AccessResolver::new(Arc::new(oracle));

        let out = resolver
            .resolve("user1", candidates(&["test-tenant"]))
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn first_denial_short_circuits_remaining_checks() {
        let oracle = Arc::new(TableOracle::default());
        let resolver = AccessResolver::new(Arc::clone(&oracle) as Arc<dyn AccessReviewer>);

        let out = resolver
            .resolve("user1", candidates(&["test-tenant"]))
            .await
            .unwrap();

        assert!(out.is_empty());
        // Nothing is granted, so only the first requirement is evaluated.
        assert_eq!(oracle.calls_for("test-tenant"), 1);
    }

    #[tokio::test]
    async fn full_grant_evaluates_every_requirement() {
        let mut table = TableOracle::default();
        table.grant_all("user1", "test-tenant");
        let oracle = Arc::new(table);
        let resolver = AccessResolver::new(Arc::clone(&oracle) as Arc<dyn AccessReviewer>);

        resolver
            .resolve("user1", candidates(&["test-tenant"]))
            .await
            .unwrap();

        assert_eq!(oracle.calls_for("test-tenant"), 8);
    }

    #[tokio::test]
    async fn oracle_failure_aborts_the_whole_resolution() {
        let mut oracle = TableOracle::default();
        oracle.grant_all("user1", "test-tenant");
        oracle.fail_on_namespace = Some("test-tenant-2".to_string());
        let resolver = AccessResolver::new(Arc::new(oracle));

        let err = resolver
            .resolve("user1", candidates(&["test-tenant", "test-tenant-2"]))
            .await
            .unwrap_err();

        assert!(matches!(err, WmError::OracleUnavailable { .. }));
    }

    #[tokio::test]
    async fn blank_identity_is_rejected() {
        let resolver = AccessResolver::new(Arc::new(TableOracle::default()));
        let err = resolver
            .resolve("  ", candidates(&["test-tenant"]))
            .await
            .unwrap_err();
        assert!(matches!(err, WmError::MissingIdentity));
    }

    #[tokio::test]
    async fn injected_policy_replaces_the_matrix() {
        let mut oracle = TableOracle::default();
        oracle.grants.insert((
            "user1".to_string(),
            "test-tenant".to_string(),
            "secrets".to_string(),
            "get".to_string(),
        ));
        let policy = AccessPolicy::new(vec![PolicyRequirement::new("", "secrets", "get")]);
        let resolver = AccessResolver::new(Arc::new(oracle)).with_policy(policy);

        let out = resolver
            .resolve("user1", candidates(&["test-tenant"]))
            .await
            .unwrap();
        assert_eq!(out.len(), 1);
    }
}
