//! # Clipboard
//!
//! Subtree capture and identity-remapped cloning.
//!
//! A payload is a detached deep copy of one subtree at the moment of
//! capture: the root's `parent_id` is nulled, but every internal
//! `parent_id`/`children` link between captured nodes is preserved, so the
//! payload stays independent of later store mutations and can be grafted
//! back as a structurally identical subtree.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::mutations::MutationError;
use crate::node::{Node, NodeId};
use crate::store::NodeStore;

/// A detached copy of a subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardPayload {
    /// Subtree root, `parent_id` forced to `None`.
    pub root: Node,

    /// All transitive descendants, breadth-first, with internal links intact.
    pub descendants: Vec<Node>,
}

impl ClipboardPayload {
    /// Total number of captured nodes.
    pub fn len(&self) -> usize {
        self.descendants.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false // a payload always holds at least its root
    }
}

/// Capture `id` and its subtree as a detached payload. Pure read; the store
/// is not touched.
pub fn capture(store: &NodeStore, id: &str) -> Result<ClipboardPayload, MutationError> {
    let node = store
        .get(id)
        .ok_or_else(|| MutationError::NotFound(id.to_string()))?;

    let mut root = node.clone();
    root.parent_id = None;

    let mut descendants = Vec::new();
    let mut queue: VecDeque<NodeId> = root.children.iter().cloned().collect();
    while let Some(next) = queue.pop_front() {
        if let Some(child) = store.get(&next) {
            queue.extend(child.children.iter().cloned());
            descendants.push(child.clone());
        }
    }

    Ok(ClipboardPayload { root, descendants })
}

/// Clone a payload under fresh identities.
///
/// Every node gets a new id from the remap table; all internal
/// `parent_id`/`children` references are rewritten through the table, so no
/// original id escapes into the clone.
pub fn remap(payload: &ClipboardPayload) -> ClipboardPayload {
    let mut table: HashMap<NodeId, NodeId> = HashMap::new();
    table.insert(payload.root.id.clone(), fresh_id(&payload.root.id));
    for node in &payload.descendants {
        table.insert(node.id.clone(), fresh_id(&node.id));
    }

    let rewrite = |node: &Node| -> Node {
        let mut clone = node.clone();
        clone.id = table[&node.id].clone();
        clone.parent_id = node
            .parent_id
            .as_ref()
            .map(|p| table.get(p).cloned().unwrap_or_else(|| p.clone()));
        clone.children = node
            .children
            .iter()
            .map(|c| table.get(c).cloned().unwrap_or_else(|| c.clone()))
            .collect();
        clone
    };

    ClipboardPayload {
        root: rewrite(&payload.root),
        descendants: payload.descendants.iter().map(rewrite).collect(),
    }
}

/// Fresh id derived from the original: time token plus a process-wide
/// monotonic counter, so clones of the same node within one millisecond
/// still never collide.
fn fresh_id(base: &str) -> NodeId {
    static SEQ: AtomicU64 = AtomicU64::new(0);

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{base}-copy-{millis}-{seq}")
}
