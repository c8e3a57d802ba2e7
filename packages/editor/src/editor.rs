//! # Editor Session
//!
//! The command layer over store, history, and clipboard.
//!
//! Every mutating command follows one protocol: take a pre-mutation snapshot
//! (cheap, structurally shared), apply the mutation, and only on success
//! commit the snapshot to history, which invalidates pending redo state. A
//! failed command leaves store, history, selection, and clipboard exactly as
//! they were. Read-only queries (selection, lookup) never touch history.
//!
//! All external callers go through here: the drag-and-drop layer via
//! [`Editor::add_node`]/[`Editor::apply_drop`], property forms via
//! [`Editor::update_props`], and hotkeys/menus via the clipboard, undo/redo,
//! and removal commands.

use std::path::Path;

use crate::clipboard::{self, ClipboardPayload};
use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::history::History;
use crate::mutations::{Mutation, MutationError};
use crate::node::{Node, NodeId, NodeProps};
use crate::store::{NodeStore, Placement};
use crate::storage;

/// Single-session editing state: the node collection plus everything that
/// deliberately stays out of history snapshots (selection, clipboard).
#[derive(Debug)]
pub struct Editor {
    store: NodeStore,
    history: History,
    clipboard: Option<ClipboardPayload>,
    selected: Option<NodeId>,
    config: EditorConfig,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            store: NodeStore::new(),
            history: History::with_max_levels(config.max_history),
            clipboard: None,
            selected: None,
            config,
        }
    }

    // ---- queries (never touch history) ----

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.store.get(id)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selection is not a mutation: no history entry, no redo invalidation.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    pub fn clipboard(&self) -> Option<&ClipboardPayload> {
        self.clipboard.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ---- mutation protocol ----

    /// Snapshot-before → apply → record. The snapshot is committed to
    /// history only when apply succeeds.
    fn commit(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        let snapshot = self.store.snapshot();
        mutation.apply(&mut self.store)?;
        self.history.record(snapshot);
        tracing::debug!(op = mutation.name(), "applied mutation");
        Ok(())
    }

    // ---- structural commands ----

    /// Insert a new node, optionally under a container parent (the palette
    /// drop path).
    pub fn add_node(&mut self, node: Node, parent_id: Option<&str>) -> Result<(), EditorError> {
        self.commit(Mutation::Insert {
            node,
            parent_id: parent_id.map(str::to_string),
            index: None,
        })
    }

    /// Shallow-merge a props patch (the property-form write path).
    pub fn update_props(&mut self, id: &str, patch: NodeProps) -> Result<(), EditorError> {
        self.commit(Mutation::SetProps {
            id: id.to_string(),
            patch,
        })
    }

    /// Remove a node and its subtree. Clears the selection if it pointed
    /// anywhere inside the removed subtree.
    pub fn remove_node(&mut self, id: &str) -> Result<(), EditorError> {
        let doomed = self.store.subtree_ids(id);
        self.commit(Mutation::Remove { id: id.to_string() })?;
        if let Some(selected) = &self.selected {
            if doomed.contains(selected) {
                self.selected = None;
            }
        }
        Ok(())
    }

    /// Reposition within one sibling list (`None` = root set).
    pub fn reorder(
        &mut self,
        parent_id: Option<&str>,
        from: usize,
        to: usize,
    ) -> Result<(), EditorError> {
        self.commit(Mutation::Reorder {
            parent_id: parent_id.map(str::to_string),
            from,
            to,
        })
    }

    /// Unified reparent-and-reposition.
    pub fn move_node(
        &mut self,
        id: &str,
        new_parent_id: Option<&str>,
        index: usize,
    ) -> Result<(), EditorError> {
        self.commit(Mutation::Reparent {
            id: id.to_string(),
            new_parent_id: new_parent_id.map(str::to_string),
            index,
        })
    }

    /// Translate a completed drag gesture into the corresponding structural
    /// mutation: a same-parent drop is a reorder, anything else a move.
    pub fn apply_drop(
        &mut self,
        draggable_id: &str,
        source_parent_id: Option<&str>,
        dest_parent_id: Option<&str>,
        dest_index: usize,
    ) -> Result<(), EditorError> {
        if source_parent_id == dest_parent_id {
            let siblings = match dest_parent_id {
                None => self.store.roots(),
                Some(parent) => self
                    .store
                    .children_of(parent)
                    .ok_or_else(|| MutationError::NotFound(parent.to_string()))?,
            };
            let from = siblings
                .iter()
                .position(|entry| entry == draggable_id)
                .ok_or_else(|| MutationError::NotFound(draggable_id.to_string()))?;
            self.reorder(dest_parent_id, from, dest_index)
        } else {
            self.move_node(draggable_id, dest_parent_id, dest_index)
        }
    }

    // ---- clipboard commands ----

    /// Capture a subtree to the clipboard. Not a mutation; no history entry.
    pub fn copy(&mut self, id: &str) -> Result<(), EditorError> {
        self.clipboard = Some(clipboard::capture(&self.store, id)?);
        Ok(())
    }

    /// Capture, then remove (recorded). The clipboard is only replaced once
    /// the removal succeeds.
    pub fn cut(&mut self, id: &str) -> Result<(), EditorError> {
        let payload = clipboard::capture(&self.store, id)?;
        self.remove_node(id)?;
        self.clipboard = Some(payload);
        Ok(())
    }

    /// Clone the clipboard under fresh ids and append it to the end of the
    /// target parent's children (or the root set). An empty clipboard is a
    /// quiet no-op. Returns the new root id.
    pub fn paste(&mut self, parent_id: Option<&str>) -> Result<Option<NodeId>, EditorError> {
        let Some(payload) = &self.clipboard else {
            return Ok(None);
        };

        let clone = clipboard::remap(payload);
        let root_id = clone.root.id.clone();
        self.commit(Mutation::Graft {
            root: clone.root,
            descendants: clone.descendants,
            parent_id: parent_id.map(str::to_string),
            placement: Placement::End,
        })?;
        Ok(Some(root_id))
    }

    /// Paste keyed off the current selection: a container selection receives
    /// the clone; any other selection redirects to its parent.
    pub fn paste_at_selection(&mut self) -> Result<Option<NodeId>, EditorError> {
        let Some(selected) = self.selected.clone() else {
            return Ok(None);
        };
        let target = match self.store.get(&selected) {
            Some(node) if node.node_type.is_container() => Some(selected),
            Some(node) => node.parent_id.clone(),
            None => return Err(MutationError::NotFound(selected).into()),
        };
        self.paste(target.as_deref())
    }

    /// Clone a subtree next to its original: the copy lands in the
    /// original's own parent, immediately after it. Returns the new root id.
    pub fn duplicate(&mut self, id: &str) -> Result<NodeId, EditorError> {
        let payload = clipboard::capture(&self.store, id)?;
        let parent_id = self
            .store
            .get(id)
            .and_then(|n| n.parent_id.clone());

        let clone = clipboard::remap(&payload);
        let root_id = clone.root.id.clone();
        self.commit(Mutation::Graft {
            root: clone.root,
            descendants: clone.descendants,
            parent_id,
            placement: Placement::After(id.to_string()),
        })?;
        Ok(root_id)
    }

    // ---- history commands ----

    /// Step back one snapshot. Selection and clipboard are untouched.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.snapshot()) {
            Some(previous) => {
                self.store = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Selection and clipboard are untouched.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.store.snapshot()) {
            Some(next) => {
                self.store = next;
                true
            }
            None => false,
        }
    }

    // ---- persistence ----

    pub fn export_json(&self) -> Result<String, EditorError> {
        storage::to_json(&self.store)
    }

    /// Replace the whole document from JSON. On success selection is cleared
    /// and history reset; on failure nothing changes.
    pub fn import_json(&mut self, data: &str) -> Result<(), EditorError> {
        let store = storage::from_json(data).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected layout import");
        })?;
        self.replace_store(store);
        Ok(())
    }

    /// Write the layout to the configured slot.
    pub fn save(&self) -> Result<(), EditorError> {
        storage::save(&self.store, &self.config.slot)
    }

    /// Reload the layout from the configured slot. Same reset semantics as
    /// [`Editor::import_json`].
    pub fn load(&mut self) -> Result<(), EditorError> {
        let store = storage::load(&self.config.slot)?;
        self.replace_store(store);
        Ok(())
    }

    /// Load into a fresh editor from an explicit slot path.
    pub fn load_from(path: &Path, config: EditorConfig) -> Result<Self, EditorError> {
        let store = storage::load(path)?;
        let mut editor = Editor::with_config(config);
        editor.store = store;
        Ok(editor)
    }

    fn replace_store(&mut self, store: NodeStore) {
        self.store = store;
        self.selected = None;
        self.history.clear();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
