use serde::Serialize;

use super::{content::ContentView, kinds::FenceKind};
use crate::parsing::rope::span::Span;

/// The structural kind of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// Default when no other block opener matches.
    Paragraph,
    /// A single `#` heading line.
    Heading { level: u8 },
    /// A list item and its continuation lines.
    ListItem { ordered: bool },
    /// A `[ ]` / `[x]` item and its continuation lines.
    Checkbox { checked: bool },
    /// A fenced code block (``` or ~~~).
    FencedCode {
        kind: FenceKind,
        /// Info string of the opening fence.
        info: String,
        /// False when input ended before a closing fence.
        closed: bool,
    },
}

impl BlockKind {
    /// Fenced code is never split further or scanned for math.
    pub fn is_atomic(&self) -> bool {
        matches!(self, BlockKind::FencedCode { .. })
    }

    pub fn takes_continuation(&self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::ListItem { .. } | BlockKind::Checkbox { .. }
        )
    }
}

/// A block emitted by the builder, in terms of spans into the rope.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters and indentation.
    pub span: Span,
    /// What the block's text is made of.
    pub content: ContentView,
}
