//! # Undo/Redo History
//!
//! Bounded past/future stacks of full node-collection snapshots.
//!
//! ## Design
//!
//! - Before each mutating command the pre-mutation snapshot is recorded;
//!   recording clears the future stack (a new mutation permanently discards
//!   pending redo state)
//! - The past stack is bounded; exceeding the bound evicts the oldest entry
//! - Snapshots are structurally shared ([`NodeStore`] clones are Arc bumps),
//!   so a deep history stays cheap
//! - Selection and clipboard are not part of a snapshot and survive
//!   undo/redo unchanged

use crate::store::NodeStore;

/// Default bound on the past stack.
pub const DEFAULT_MAX_LEVELS: usize = 50;

/// Linear undo/redo history over store snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots preceding the current state (most recent last).
    past: Vec<NodeStore>,

    /// Snapshots undone from the current state (most recent last).
    future: Vec<NodeStore>,

    /// Maximum past entries (0 = unlimited).
    max_levels: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_levels,
        }
    }

    /// Record the pre-mutation snapshot of a committed mutation. Clears any
    /// pending redo state and evicts the oldest entry past the bound.
    pub fn record(&mut self, snapshot: NodeStore) {
        self.past.push(snapshot);

        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.remove(0);
            tracing::debug!(max = self.max_levels, "evicted oldest history entry");
        }

        self.future.clear();
    }

    /// Step back: returns the snapshot to make current, storing `current`
    /// for redo. `None` if there is nothing to undo.
    pub fn undo(&mut self, current: NodeStore) -> Option<NodeStore> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward: returns the snapshot to make current, storing `current`
    /// for undo. `None` if there is nothing to redo.
    pub fn redo(&mut self, current: NodeStore) -> Option<NodeStore> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Drop all history (used when a loaded/imported layout replaces the
    /// store wholesale).
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
