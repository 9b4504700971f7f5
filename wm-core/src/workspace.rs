//! Projection of accessible namespaces into the caller-facing
//! workspace views.

use crate::errors::{WmError, WmResult};
use crate::types::{CandidateNamespace, Workspace, WorkspaceList};

/// Assemble one workspace per accessible namespace. Pure and total;
/// output order equals input order. Callers must only pass namespaces
/// that already passed the full policy check.
pub fn assemble_workspaces(namespaces: Vec<CandidateNamespace>) -> WorkspaceList {
    let items = namespaces
        .into_iter()
        .map(|ns| Workspace::for_namespace(ns.name))
        .collect();
    WorkspaceList::new(items)
}

/// Pick the workspace with exactly this name out of an assembled list.
/// Absence is a lookup error, not an aggregation failure.
pub fn find_workspace(list: &WorkspaceList, name: &str) -> WmResult<Workspace> {
    list.items
        .iter()
        .find(|ws| ws.name() == name)
        .cloned()
        .ok_or_else(|| WmError::workspace_not_found(name))
}
