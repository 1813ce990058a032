//! Splits Markdown-like text into annotated text blocks for sequential
//! rendering, keeping math apart from prose.
//!
//! ```text
//! raw text ──► blocks (parsing::blocks) ──► segments
//!          ──► fragments (parsing::math) ──► separators (fragments::normalize)
//! ```

pub mod fragments;
pub mod parsing;
pub mod pipeline;
pub mod rules;

// Re-export key types for easier usage
pub use fragments::{FragmentError, TextBlock, without_separators};
pub use parsing::{Segment, format_segment, parse_segments};
pub use pipeline::{Pipeline, process_markdown_text};
pub use rules::{MathDelimiters, RuleSetConfig, RuleSetError, SeparatorRuleSet};
