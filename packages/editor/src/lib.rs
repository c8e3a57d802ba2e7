//! # Mosaic Editor
//!
//! Document/state core of the Mosaic visual layout builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ callers: drag-drop layer / hotkeys / menus  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: command layer                       │
//! │  - snapshot-before / apply / invalidate-redo│
//! │  - selection + clipboard state              │
//! │  - persistence entry points                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: node arena + tree invariants         │
//! │ history: bounded past/future snapshots      │
//! │ clipboard: capture + identity remap         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is the source of truth**: presentation reads `type` and
//!    `props`; it writes back only through commands
//! 2. **Commands are total**: a mutation fully applies or fails with the
//!    store left in its prior valid state
//! 3. **History is snapshots**: exact state time-travel, with structural
//!    sharing keeping the bounded stacks cheap
//! 4. **Identity is never reused**: clipboard clones run through a remap
//!    table of freshly generated ids
//!
//! ## Usage
//!
//! ```rust
//! use mosaic_editor::{Editor, Node, NodeType};
//!
//! let mut editor = Editor::new();
//! editor.add_node(Node::new("hero", NodeType::Container), None)?;
//! editor.add_node(Node::new("cta", NodeType::Button), Some("hero"))?;
//!
//! editor.copy("hero")?;
//! let pasted = editor.paste(None)?;
//! assert!(pasted.is_some());
//!
//! editor.undo();
//! # Ok::<(), mosaic_editor::EditorError>(())
//! ```

mod clipboard;
mod config;
mod editor;
mod errors;
mod history;
mod mutations;
mod node;
mod storage;
mod store;

pub use clipboard::{capture, remap, ClipboardPayload};
pub use config::{EditorConfig, DEFAULT_CONFIG_NAME};
pub use editor::Editor;
pub use errors::EditorError;
pub use history::{History, DEFAULT_MAX_LEVELS};
pub use mutations::{Mutation, MutationError};
pub use node::{
    ButtonProps, ContainerProps, DividerProps, ImageProps, ListProps, Node, NodeId, NodeProps,
    NodeType, TextProps,
};
pub use storage::{from_json, load, save, to_json, LayoutFile, LAYOUT_VERSION};
pub use store::{AuditViolation, NodeStore, Placement};
