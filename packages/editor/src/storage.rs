//! # Layout Persistence
//!
//! Versioned JSON format against a single named slot.
//!
//! `{ "components": Node[], "version": "1.0.0" }`: the node collection is
//! serialized verbatim in document order. Import parses and fully validates
//! before anything replaces in-memory state; a failed parse reports
//! [`EditorError::MalformedPayload`] and mutates nothing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::EditorError;
use crate::node::Node;
use crate::store::NodeStore;

pub const LAYOUT_VERSION: &str = "1.0.0";

/// On-disk layout format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub components: Vec<Node>,
    pub version: String,
}

/// Serialize the current collection (document order, pretty-printed).
pub fn to_json(store: &NodeStore) -> Result<String, EditorError> {
    let layout = LayoutFile {
        components: store.document_order().into_iter().cloned().collect(),
        version: LAYOUT_VERSION.to_string(),
    };
    Ok(serde_json::to_string_pretty(&layout)?)
}

/// Parse and validate a layout. Nothing is mutated on failure.
pub fn from_json(data: &str) -> Result<NodeStore, EditorError> {
    let layout: LayoutFile = serde_json::from_str(data)?;
    if layout.version != LAYOUT_VERSION {
        // No migration story across versions; take the nodes as-is.
        tracing::warn!(version = %layout.version, "loading layout with unexpected version");
    }
    Ok(NodeStore::from_nodes(layout.components)?)
}

/// Write the layout to its slot file.
pub fn save(store: &NodeStore, path: &Path) -> Result<(), EditorError> {
    let json = to_json(store)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a layout back from its slot file.
pub fn load(path: &Path) -> Result<NodeStore, EditorError> {
    let data = std::fs::read_to_string(path)?;
    from_json(&data)
}
