//! # Node Store
//!
//! Flat id → node arena plus an ordered root list.
//!
//! ## Design
//!
//! - Nodes live behind `Arc`, so cloning the store (a history snapshot) is a
//!   refcount bump per node, not a deep copy. Mutation goes through
//!   `Arc::make_mut` copy-on-write.
//! - Every structural primitive is check-then-commit: all preconditions are
//!   verified before the first write, so a failed call leaves the store
//!   untouched.
//! - Sibling order is owned by the parent's `children` list; root order by
//!   the store's `roots` list. `parent_id` back-references must agree with
//!   those lists at all times (see [`NodeStore::audit`]).

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use thiserror::Error;

use crate::mutations::MutationError;
use crate::node::{Node, NodeId, NodeProps};

/// Where a grafted subtree lands in its target sibling list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    /// Append at the end of the list (paste).
    End,
    /// Insert immediately after an existing sibling (duplicate).
    After(NodeId),
}

/// A tree-invariant violation found by [`NodeStore::audit`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditViolation {
    #[error("node `{id}` references missing node `{missing}`")]
    Dangling { id: NodeId, missing: NodeId },

    #[error("node `{id}` is parented under non-container `{parent}`")]
    NonContainerParent { id: NodeId, parent: NodeId },

    #[error("leaf node `{0}` has children")]
    LeafWithChildren(NodeId),

    #[error("child `{child}` of `{parent}` does not point back at it")]
    ChildParentMismatch { parent: NodeId, child: NodeId },

    #[error("node `{0}` is listed more than once in a sibling list")]
    DuplicateListing(NodeId),

    #[error("node `{0}` is missing from its sibling list")]
    NotListed(NodeId),

    #[error("node `{0}` is not reachable from any root")]
    Unreachable(NodeId),
}

/// The node collection: every mutation primitive of the document model.
///
/// Cloning a `NodeStore` produces a snapshot that shares node storage with
/// the original until either side mutates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    nodes: HashMap<NodeId, Arc<Node>>,
    roots: Vec<NodeId>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a flat node list (import path). Root order
    /// follows list order; the result is audited against every invariant
    /// before it is returned.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, AuditViolation> {
        let mut store = NodeStore::new();
        for node in nodes {
            if store.contains(&node.id) {
                return Err(AuditViolation::DuplicateListing(node.id));
            }
            if node.parent_id.is_none() {
                store.roots.push(node.id.clone());
            }
            store.nodes.insert(node.id.clone(), Arc::new(node));
        }
        store.audit()?;
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id).map(Arc::as_ref)
    }

    /// Root-level node ids in presentation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Ordered children of a node, or `None` if the id is absent.
    pub fn children_of(&self, id: &str) -> Option<&[NodeId]> {
        self.get(id).map(|n| n.children.as_slice())
    }

    /// Cheap structurally-shared copy of the whole collection.
    pub fn snapshot(&self) -> NodeStore {
        self.clone()
    }

    /// `{id} ∪ descendants(id)` in breadth-first order. Empty if absent.
    pub fn subtree_ids(&self, id: &str) -> Vec<NodeId> {
        let Some(node) = self.get(id) else {
            return Vec::new();
        };

        let mut collected = vec![node.id.clone()];
        // Worklist rather than recursion; trees can be arbitrarily deep.
        let mut queue: VecDeque<NodeId> = node.children.iter().cloned().collect();
        while let Some(next) = queue.pop_front() {
            if let Some(child) = self.get(&next) {
                queue.extend(child.children.iter().cloned());
            }
            collected.push(next);
        }
        collected
    }

    /// All nodes in document order: roots in presentation order, each
    /// followed by its subtree breadth-first.
    pub fn document_order(&self) -> Vec<&Node> {
        let roots = self.roots.clone();
        roots
            .iter()
            .flat_map(|root| self.subtree_ids(root))
            .filter_map(|id| self.nodes.get(&id).map(Arc::as_ref))
            .collect()
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id).map(Arc::make_mut)
    }

    /// Sibling list for a parent id (`None` = the root set).
    fn sibling_list(&self, parent_id: Option<&str>) -> Option<&Vec<NodeId>> {
        match parent_id {
            None => Some(&self.roots),
            Some(id) => self.nodes.get(id).map(|n| &n.children),
        }
    }

    fn sibling_list_mut(&mut self, parent_id: Option<&str>) -> Option<&mut Vec<NodeId>> {
        match parent_id {
            None => Some(&mut self.roots),
            Some(id) => self.node_mut(id).map(|n| &mut n.children),
        }
    }

    fn unlink(&mut self, id: &str) {
        let parent = self.get(id).and_then(|n| n.parent_id.clone());
        if let Some(list) = self.sibling_list_mut(parent.as_deref()) {
            list.retain(|entry| entry != id);
        }
    }

    // ---- insert ----

    pub(crate) fn check_insert(
        &self,
        node: &Node,
        parent_id: Option<&str>,
    ) -> Result<(), MutationError> {
        if self.contains(&node.id) {
            return Err(MutationError::DuplicateId(node.id.clone()));
        }
        if let Some(parent_id) = parent_id {
            let parent = self
                .get(parent_id)
                .ok_or_else(|| MutationError::NotFound(parent_id.to_string()))?;
            if !parent.node_type.is_container() {
                return Err(MutationError::InvalidParent(parent_id.to_string()));
            }
        }
        Ok(())
    }

    /// Insert one new node, optionally parented. The record becomes a leaf
    /// entry: its `parent_id` is overwritten and its `children` cleared.
    pub fn insert(
        &mut self,
        mut node: Node,
        parent_id: Option<&str>,
        index: Option<usize>,
    ) -> Result<(), MutationError> {
        self.check_insert(&node, parent_id)?;

        node.parent_id = parent_id.map(str::to_string);
        node.children.clear();
        let id = node.id.clone();
        self.nodes.insert(id.clone(), Arc::new(node));

        let list = self
            .sibling_list_mut(parent_id)
            .expect("parent checked above");
        let at = index.unwrap_or(list.len()).min(list.len());
        list.insert(at, id);
        Ok(())
    }

    // ---- props ----

    pub(crate) fn check_set_props(
        &self,
        id: &str,
        patch: &NodeProps,
    ) -> Result<(), MutationError> {
        let node = self
            .get(id)
            .ok_or_else(|| MutationError::NotFound(id.to_string()))?;
        if patch.node_type() != node.node_type {
            return Err(MutationError::TypeMismatch {
                id: id.to_string(),
                expected: node.node_type,
            });
        }
        Ok(())
    }

    /// Shallow per-field merge of `patch` into the node's props.
    pub fn set_props(&mut self, id: &str, patch: NodeProps) -> Result<(), MutationError> {
        self.check_set_props(id, &patch)?;
        let node = self.node_mut(id).expect("existence checked above");
        let merged = node.props.merge(patch);
        debug_assert!(merged, "variant agreement checked above");
        Ok(())
    }

    // ---- remove ----

    pub(crate) fn check_remove(&self, id: &str) -> Result<(), MutationError> {
        if !self.contains(id) {
            return Err(MutationError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Delete a node and its whole subtree. Returns the removed ids.
    pub fn remove(&mut self, id: &str) -> Result<Vec<NodeId>, MutationError> {
        self.check_remove(id)?;

        let doomed = self.subtree_ids(id);
        self.unlink(id);
        for victim in &doomed {
            self.nodes.remove(victim);
        }
        tracing::debug!(id, count = doomed.len(), "removed subtree");
        Ok(doomed)
    }

    // ---- reorder ----

    pub(crate) fn check_reorder(&self, parent_id: Option<&str>) -> Result<(), MutationError> {
        if let Some(parent_id) = parent_id {
            let parent = self
                .get(parent_id)
                .ok_or_else(|| MutationError::NotFound(parent_id.to_string()))?;
            if !parent.node_type.is_container() {
                return Err(MutationError::InvalidParent(parent_id.to_string()));
            }
        }
        Ok(())
    }

    /// Reposition one entry within a sibling list. Out-of-range `from` or
    /// `from == to` is a no-op; `to` is clamped.
    pub fn reorder(
        &mut self,
        parent_id: Option<&str>,
        from: usize,
        to: usize,
    ) -> Result<(), MutationError> {
        self.check_reorder(parent_id)?;

        let list = self
            .sibling_list_mut(parent_id)
            .expect("parent checked above");
        if from >= list.len() || from == to {
            return Ok(());
        }
        let id = list.remove(from);
        let at = to.min(list.len());
        list.insert(at, id);
        Ok(())
    }

    // ---- reparent ----

    pub(crate) fn check_reparent(
        &self,
        id: &str,
        new_parent_id: Option<&str>,
    ) -> Result<(), MutationError> {
        if !self.contains(id) {
            return Err(MutationError::NotFound(id.to_string()));
        }
        if let Some(parent_id) = new_parent_id {
            let parent = self
                .get(parent_id)
                .ok_or_else(|| MutationError::NotFound(parent_id.to_string()))?;
            if !parent.node_type.is_container() {
                return Err(MutationError::InvalidParent(parent_id.to_string()));
            }
            // Moving a node under itself or one of its descendants would
            // detach the subtree into a cycle.
            if self.subtree_ids(id).iter().any(|n| n == parent_id) {
                return Err(MutationError::CycleDetected(id.to_string()));
            }
        }
        Ok(())
    }

    /// Unified reparent-and-reposition.
    ///
    /// When the target parent equals the current parent this reduces to an
    /// in-place reorder; `index` is interpreted against the sibling list with
    /// the moved node already removed (the convention drag-and-drop callers
    /// produce). Cross-parent: unlink, re-point `parent_id`, insert at the
    /// clamped index.
    pub fn reparent(
        &mut self,
        id: &str,
        new_parent_id: Option<&str>,
        index: usize,
    ) -> Result<(), MutationError> {
        self.check_reparent(id, new_parent_id)?;

        let current_parent = self
            .get(id)
            .and_then(|n| n.parent_id.clone());

        if current_parent.as_deref() == new_parent_id {
            let list = self
                .sibling_list_mut(new_parent_id)
                .expect("parent checked above");
            if let Some(pos) = list.iter().position(|entry| entry == id) {
                list.remove(pos);
                let at = index.min(list.len());
                list.insert(at, id.to_string());
            }
            return Ok(());
        }

        self.unlink(id);
        self.node_mut(id).expect("existence checked above").parent_id =
            new_parent_id.map(str::to_string);
        let list = self
            .sibling_list_mut(new_parent_id)
            .expect("parent checked above");
        let at = index.min(list.len());
        list.insert(at, id.to_string());
        Ok(())
    }

    // ---- graft ----

    pub(crate) fn check_graft(
        &self,
        root: &Node,
        descendants: &[Node],
        parent_id: Option<&str>,
        placement: &Placement,
    ) -> Result<(), MutationError> {
        let mut incoming = HashSet::new();
        for node in std::iter::once(root).chain(descendants) {
            if self.contains(&node.id) || !incoming.insert(node.id.as_str()) {
                return Err(MutationError::DuplicateId(node.id.clone()));
            }
        }

        // The payload must be a self-contained, well-linked subtree. Grafts
        // can arrive off the wire, so none of this can be assumed.
        if root.parent_id.is_some() {
            return Err(MutationError::MalformedPayload(root.id.clone()));
        }
        let by_id: HashMap<&str, &Node> = std::iter::once(root)
            .chain(descendants)
            .map(|node| (node.id.as_str(), node))
            .collect();
        let mut listed = HashSet::new();
        for node in std::iter::once(root).chain(descendants) {
            if !node.children.is_empty() && !node.node_type.is_container() {
                return Err(MutationError::InvalidParent(node.id.clone()));
            }
            for child_id in &node.children {
                if !listed.insert(child_id.as_str()) {
                    return Err(MutationError::DuplicateId(child_id.clone()));
                }
                let linked = by_id
                    .get(child_id.as_str())
                    .is_some_and(|child| child.parent_id.as_deref() == Some(node.id.as_str()));
                if !linked {
                    return Err(MutationError::MalformedPayload(child_id.clone()));
                }
            }
        }
        for node in descendants {
            let reachable = node
                .parent_id
                .as_deref()
                .and_then(|p| by_id.get(p))
                .is_some_and(|parent| parent.children.iter().any(|c| c == &node.id));
            if !reachable {
                return Err(MutationError::MalformedPayload(node.id.clone()));
            }
        }

        if let Some(parent_id) = parent_id {
            let parent = self
                .get(parent_id)
                .ok_or_else(|| MutationError::NotFound(parent_id.to_string()))?;
            if !parent.node_type.is_container() {
                return Err(MutationError::InvalidParent(parent_id.to_string()));
            }
        }

        if let Placement::After(anchor) = placement {
            let listed = self
                .sibling_list(parent_id)
                .is_some_and(|list| list.contains(anchor));
            if !listed {
                return Err(MutationError::NotFound(anchor.clone()));
            }
        }
        Ok(())
    }

    /// Insert a detached subtree wholesale (clipboard paste/duplicate). The
    /// payload's internal `parent_id`/`children` links are validated and then
    /// taken as-is; only the root is re-pointed at the target parent.
    pub fn graft(
        &mut self,
        mut root: Node,
        descendants: Vec<Node>,
        parent_id: Option<&str>,
        placement: Placement,
    ) -> Result<(), MutationError> {
        self.check_graft(&root, &descendants, parent_id, &placement)?;

        root.parent_id = parent_id.map(str::to_string);
        let root_id = root.id.clone();
        let count = descendants.len() + 1;
        self.nodes.insert(root_id.clone(), Arc::new(root));
        for node in descendants {
            self.nodes.insert(node.id.clone(), Arc::new(node));
        }

        let list = self
            .sibling_list_mut(parent_id)
            .expect("parent checked above");
        match placement {
            Placement::End => list.push(root_id.clone()),
            Placement::After(anchor) => {
                let pos = list
                    .iter()
                    .position(|entry| *entry == anchor)
                    .expect("anchor checked above");
                list.insert(pos + 1, root_id.clone());
            }
        }
        tracing::debug!(root = %root_id, count, "grafted subtree");
        Ok(())
    }

    // ---- integrity ----

    /// Verify every tree invariant; used by tests and by import validation.
    pub fn audit(&self) -> Result<(), AuditViolation> {
        for root in &self.roots {
            let node = self.get(root).ok_or_else(|| AuditViolation::Dangling {
                id: "<roots>".to_string(),
                missing: root.clone(),
            })?;
            if node.parent_id.is_some() {
                return Err(AuditViolation::NotListed(root.clone()));
            }
        }

        for node in self.nodes.values() {
            if let Some(parent_id) = &node.parent_id {
                let parent = self.get(parent_id).ok_or_else(|| AuditViolation::Dangling {
                    id: node.id.clone(),
                    missing: parent_id.clone(),
                })?;
                if !parent.node_type.is_container() {
                    return Err(AuditViolation::NonContainerParent {
                        id: node.id.clone(),
                        parent: parent_id.clone(),
                    });
                }
            }

            if !node.node_type.is_container() && !node.children.is_empty() {
                return Err(AuditViolation::LeafWithChildren(node.id.clone()));
            }

            let mut seen = HashSet::new();
            for child_id in &node.children {
                if !seen.insert(child_id.as_str()) {
                    return Err(AuditViolation::DuplicateListing(child_id.clone()));
                }
                let child = self.get(child_id).ok_or_else(|| AuditViolation::Dangling {
                    id: node.id.clone(),
                    missing: child_id.clone(),
                })?;
                if child.parent_id.as_deref() != Some(node.id.as_str()) {
                    return Err(AuditViolation::ChildParentMismatch {
                        parent: node.id.clone(),
                        child: child_id.clone(),
                    });
                }
            }

            // Exact membership in the owning sibling list.
            let list = self
                .sibling_list(node.parent_id.as_deref())
                .expect("parent existence checked above");
            match list.iter().filter(|entry| **entry == node.id).count() {
                0 => return Err(AuditViolation::NotListed(node.id.clone())),
                1 => {}
                _ => return Err(AuditViolation::DuplicateListing(node.id.clone())),
            }
        }

        // Acyclicity: everything must be reachable from the root set.
        let mut reachable = HashSet::new();
        for root in &self.roots {
            for id in self.subtree_ids(root) {
                reachable.insert(id);
            }
        }
        for id in self.nodes.keys() {
            if !reachable.contains(id) {
                return Err(AuditViolation::Unreachable(id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    fn container(id: &str) -> Node {
        Node::new(id, NodeType::Container)
    }

    fn button(id: &str) -> Node {
        Node::new(id, NodeType::Button)
    }

    #[test]
    fn test_add_parented_node_links_both_directions() {
        let mut store = NodeStore::new();
        store.insert(container("b1"), None, None).unwrap();
        store.insert(button("b2"), Some("b1"), None).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.children_of("b1").unwrap(), &["b2".to_string()]);
        assert_eq!(store.get("b2").unwrap().parent_id.as_deref(), Some("b1"));
        store.audit().unwrap();
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = NodeStore::new();
        store.insert(button("b1"), None, None).unwrap();
        let err = store.insert(button("b1"), None, None).unwrap_err();
        assert_eq!(err, MutationError::DuplicateId("b1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_rejects_leaf_parent() {
        let mut store = NodeStore::new();
        store.insert(button("b1"), None, None).unwrap();
        let err = store.insert(button("b2"), Some("b1"), None).unwrap_err();
        assert_eq!(err, MutationError::InvalidParent("b1".to_string()));
        assert!(!store.contains("b2"));
    }

    #[test]
    fn test_remove_cascades_to_descendants_only() {
        let mut store = NodeStore::new();
        store.insert(container("root"), None, None).unwrap();
        store.insert(container("inner"), Some("root"), None).unwrap();
        store.insert(button("leaf"), Some("inner"), None).unwrap();
        store.insert(button("bystander"), None, None).unwrap();

        let removed = store.remove("root").unwrap();
        assert_eq!(removed.len(), 3);
        assert!(store.contains("bystander"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.roots(), &["bystander".to_string()]);
        store.audit().unwrap();
    }

    #[test]
    fn test_reorder_root_set() {
        let mut store = NodeStore::new();
        for id in ["a", "b", "c"] {
            store.insert(button(id), None, None).unwrap();
        }

        store.reorder(None, 0, 2).unwrap();
        assert_eq!(store.roots(), &["b", "c", "a"]);

        // out-of-range from is a no-op
        store.reorder(None, 9, 0).unwrap();
        assert_eq!(store.roots(), &["b", "c", "a"]);
        store.audit().unwrap();
    }

    #[test]
    fn test_reparent_same_parent_reduces_to_reorder() {
        let mut store = NodeStore::new();
        store.insert(container("c"), None, None).unwrap();
        for id in ["x", "y", "z"] {
            store.insert(button(id), Some("c"), None).unwrap();
        }

        store.reparent("x", Some("c"), 2).unwrap();
        assert_eq!(store.children_of("c").unwrap(), &["y", "z", "x"]);
        store.audit().unwrap();
    }

    #[test]
    fn test_reparent_across_containers() {
        let mut store = NodeStore::new();
        store.insert(container("left"), None, None).unwrap();
        store.insert(container("right"), None, None).unwrap();
        store.insert(button("b"), Some("left"), None).unwrap();

        store.reparent("b", Some("right"), 0).unwrap();
        assert!(store.children_of("left").unwrap().is_empty());
        assert_eq!(store.children_of("right").unwrap(), &["b"]);
        assert_eq!(store.get("b").unwrap().parent_id.as_deref(), Some("right"));
        store.audit().unwrap();
    }

    #[test]
    fn test_reparent_to_root_level() {
        let mut store = NodeStore::new();
        store.insert(container("c"), None, None).unwrap();
        store.insert(button("b"), Some("c"), None).unwrap();

        store.reparent("b", None, 0).unwrap();
        assert_eq!(store.roots(), &["b", "c"]);
        assert_eq!(store.get("b").unwrap().parent_id, None);
        store.audit().unwrap();
    }

    #[test]
    fn test_reparent_into_own_subtree_rejected() {
        let mut store = NodeStore::new();
        store.insert(container("outer"), None, None).unwrap();
        store.insert(container("inner"), Some("outer"), None).unwrap();

        let err = store.reparent("outer", Some("inner"), 0).unwrap_err();
        assert_eq!(err, MutationError::CycleDetected("outer".to_string()));
        store.audit().unwrap();
    }

    #[test]
    fn test_subtree_ids_breadth_first() {
        let mut store = NodeStore::new();
        store.insert(container("a"), None, None).unwrap();
        store.insert(container("b"), Some("a"), None).unwrap();
        store.insert(button("c"), Some("a"), None).unwrap();
        store.insert(button("d"), Some("b"), None).unwrap();

        assert_eq!(store.subtree_ids("a"), &["a", "b", "c", "d"]);
    }

    #[test]
    fn test_graft_rejects_payload_with_broken_links() {
        let mut store = NodeStore::new();

        // Root whose children list names a node the payload does not carry.
        let mut orphaned = container("c1");
        orphaned.children = vec!["ghost".to_string()];
        let err = store
            .graft(orphaned, Vec::new(), None, Placement::End)
            .unwrap_err();
        assert_eq!(err, MutationError::MalformedPayload("ghost".to_string()));
        assert!(store.is_empty());
        store.audit().unwrap();

        // Descendant whose parent link points outside the payload.
        let mut stray = button("b1");
        stray.parent_id = Some("elsewhere".to_string());
        let err = store
            .graft(container("c2"), vec![stray], None, Placement::End)
            .unwrap_err();
        assert_eq!(err, MutationError::MalformedPayload("b1".to_string()));
        assert!(store.is_empty());

        // Root still carrying a parent link of its own.
        let mut attached = button("b2");
        attached.parent_id = Some("c3".to_string());
        let err = store
            .graft(attached, Vec::new(), None, Placement::End)
            .unwrap_err();
        assert_eq!(err, MutationError::MalformedPayload("b2".to_string()));

        // Leaf node carrying children.
        let mut leaf = button("b3");
        leaf.children = vec!["b4".to_string()];
        let mut child = button("b4");
        child.parent_id = Some("b3".to_string());
        let err = store
            .graft(leaf, vec![child], None, Placement::End)
            .unwrap_err();
        assert_eq!(err, MutationError::InvalidParent("b3".to_string()));
        assert!(store.is_empty());
        store.audit().unwrap();
    }

    #[test]
    fn test_graft_accepts_well_linked_subtree() {
        let mut store = NodeStore::new();

        let mut root = container("section");
        root.children = vec!["headline".to_string(), "cta".to_string()];
        let mut headline = button("headline");
        headline.parent_id = Some("section".to_string());
        let mut cta = button("cta");
        cta.parent_id = Some("section".to_string());

        store
            .graft(root, vec![headline, cta], None, Placement::End)
            .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.children_of("section").unwrap(),
            &["headline".to_string(), "cta".to_string()]
        );
        store.audit().unwrap();
    }

    #[test]
    fn test_set_props_type_mismatch() {
        let mut store = NodeStore::new();
        store.insert(button("b"), None, None).unwrap();

        let err = store
            .set_props("b", NodeProps::empty(NodeType::Text))
            .unwrap_err();
        assert!(matches!(err, MutationError::TypeMismatch { .. }));
    }
}
