//! # Block Splitting
//!
//! Two-phase splitting of raw text into structural blocks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank status, indentation, fence
//!    signature, line prefix) taken from the `SeparatorRuleSet`
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    groups lines and emits `BlockNode`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`
//! - **`kinds`**: block-specific syntax (`CodeFence`, `LinePrefix`)
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`content`**: `ContentView` text projection
//! - **`open`**: `try_open_leaf` dispatch for block openers
//! - **`builder`**: `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no structure or math inside
//! - No block is ever empty; blank lines only separate
//! - Blocks are emitted in source order with non-overlapping spans

pub mod builder;
pub mod classify;
pub mod content;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::ContentView;
pub use types::{BlockKind, BlockNode};
