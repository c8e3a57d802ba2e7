//! # Structural Mutations
//!
//! Semantic operations on the node store.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is one structural operation, not a
//!    raw state diff
//! 2. **Validated**: every precondition is checked before the first write
//! 3. **Total**: a mutation either fully applies or fails leaving the store
//!    in its prior state

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::{Node, NodeId, NodeProps, NodeType};
use crate::store::{NodeStore, Placement};

/// One structural operation against a [`NodeStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Insert a single new node, optionally under a container parent.
    Insert {
        node: Node,
        parent_id: Option<NodeId>,
        index: Option<usize>,
    },

    /// Shallow-merge a props patch into a node (per-field overwrite).
    SetProps {
        id: NodeId,
        #[serde(with = "props_patch")]
        patch: NodeProps,
    },

    /// Remove a node and its whole subtree.
    Remove { id: NodeId },

    /// Reposition an entry within one sibling list (`None` = root set).
    Reorder {
        parent_id: Option<NodeId>,
        from: usize,
        to: usize,
    },

    /// Unified reparent-and-reposition. Same-parent targets reduce to an
    /// in-place reorder.
    Reparent {
        id: NodeId,
        new_parent_id: Option<NodeId>,
        index: usize,
    },

    /// Insert a detached subtree (clipboard paste/duplicate).
    Graft {
        root: Node,
        descendants: Vec<Node>,
        parent_id: Option<NodeId>,
        placement: Placement,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("node not found: {0}")]
    NotFound(NodeId),

    #[error("not a container: {0}")]
    InvalidParent(NodeId),

    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("props patch for `{id}` does not match node type {expected:?}")]
    TypeMismatch { id: NodeId, expected: NodeType },

    #[error("moving `{0}` into its own subtree would create a cycle")]
    CycleDetected(NodeId),

    #[error("graft payload is not a self-contained subtree at `{0}`")]
    MalformedPayload(NodeId),
}

impl Mutation {
    /// Check every precondition without mutating.
    pub fn validate(&self, store: &NodeStore) -> Result<(), MutationError> {
        match self {
            Mutation::Insert { node, parent_id, .. } => {
                store.check_insert(node, parent_id.as_deref())
            }
            Mutation::SetProps { id, patch } => store.check_set_props(id, patch),
            Mutation::Remove { id } => store.check_remove(id),
            Mutation::Reorder { parent_id, .. } => store.check_reorder(parent_id.as_deref()),
            Mutation::Reparent { id, new_parent_id, .. } => {
                store.check_reparent(id, new_parent_id.as_deref())
            }
            Mutation::Graft {
                root,
                descendants,
                parent_id,
                placement,
            } => store.check_graft(root, descendants, parent_id.as_deref(), placement),
        }
    }

    /// Validate, then apply. The store is untouched on error.
    pub fn apply(&self, store: &mut NodeStore) -> Result<(), MutationError> {
        match self {
            Mutation::Insert {
                node,
                parent_id,
                index,
            } => store.insert(node.clone(), parent_id.as_deref(), *index),

            Mutation::SetProps { id, patch } => store.set_props(id, patch.clone()),

            Mutation::Remove { id } => store.remove(id).map(|_| ()),

            Mutation::Reorder {
                parent_id,
                from,
                to,
            } => store.reorder(parent_id.as_deref(), *from, *to),

            Mutation::Reparent {
                id,
                new_parent_id,
                index,
            } => store.reparent(id, new_parent_id.as_deref(), *index),

            Mutation::Graft {
                root,
                descendants,
                parent_id,
                placement,
            } => store.graft(
                root.clone(),
                descendants.clone(),
                parent_id.as_deref(),
                placement.clone(),
            ),
        }
    }

    /// Debug name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Insert { .. } => "insert",
            Mutation::SetProps { .. } => "set_props",
            Mutation::Remove { .. } => "remove",
            Mutation::Reorder { .. } => "reorder",
            Mutation::Reparent { .. } => "reparent",
            Mutation::Graft { .. } => "graft",
        }
    }
}

/// Wire form for a props patch. The untagged props object cannot name its own
/// node type, so the patch travels as `{"type": ..., "props": {...}}`.
mod props_patch {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::node::{NodeProps, NodeType};

    #[derive(Serialize)]
    struct TaggedRef<'a> {
        #[serde(rename = "type")]
        node_type: NodeType,
        props: &'a NodeProps,
    }

    #[derive(Deserialize)]
    struct Tagged {
        #[serde(rename = "type")]
        node_type: NodeType,
        #[serde(default)]
        props: serde_json::Value,
    }

    pub fn serialize<S: Serializer>(patch: &NodeProps, serializer: S) -> Result<S::Ok, S::Error> {
        TaggedRef {
            node_type: patch.node_type(),
            props: patch,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NodeProps, D::Error> {
        let tagged = Tagged::deserialize(deserializer)?;
        NodeProps::from_value(tagged.node_type, tagged.props).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_mutation_serialization_round_trip() {
        let mutation = Mutation::Reparent {
            id: "b-1".to_string(),
            new_parent_id: Some("c-2".to_string()),
            index: 3,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_set_props_patch_round_trip() {
        let mutation = Mutation::SetProps {
            id: "b-1".to_string(),
            patch: NodeProps::from_value(
                NodeType::Button,
                serde_json::json!({"text": "Buy", "color": "#fff"}),
            )
            .unwrap(),
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json["setProps"]["patch"]["type"], "button");
        assert_eq!(json["setProps"]["patch"]["props"]["text"], "Buy");

        let deserialized: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_failed_validation_leaves_store_untouched() {
        let mut store = NodeStore::new();
        store
            .insert(Node::new("b1", NodeType::Button), None, None)
            .unwrap();
        let before = store.snapshot();

        let mutation = Mutation::Insert {
            node: Node::new("b2", NodeType::Text),
            parent_id: Some("b1".to_string()),
            index: None,
        };
        assert!(mutation.apply(&mut store).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let mut store = NodeStore::new();
        store
            .insert(Node::new("c1", NodeType::Container), None, None)
            .unwrap();
        let before = store.snapshot();

        let mutation = Mutation::Insert {
            node: Node::new("b1", NodeType::Button),
            parent_id: Some("c1".to_string()),
            index: None,
        };
        mutation.validate(&store).unwrap();
        assert_eq!(store, before);
    }
}
