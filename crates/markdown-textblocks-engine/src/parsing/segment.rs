use xi_rope::Rope;

use super::{
    blocks::{BlockKind, BlockNode},
    rope::span::Span,
};

/// A structural unit of the input, as handed to the math formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: BlockKind,
    span: Span,
    text: String,
}

impl Segment {
    /// Builds a segment directly. `text` is trimmed; use this for text that
    /// did not come out of the block splitter.
    pub fn new(kind: BlockKind, span: Span, text: &str) -> Self {
        Self {
            kind,
            span,
            text: text.trim().to_string(),
        }
    }

    /// Materialises a block. Returns `None` for blocks with no text.
    pub fn from_block(rope: &Rope, block: &BlockNode) -> Option<Self> {
        let text = block.content.join_content(rope);
        let segment = Self::new(block.kind.clone(), block.span, &text);
        (!segment.text.is_empty()).then_some(segment)
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    /// Byte span of the source lines this segment came from.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_atomic(&self) -> bool {
        self.kind.is_atomic()
    }
}
