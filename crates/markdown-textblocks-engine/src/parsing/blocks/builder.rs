use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    content::ContentView,
    kinds::{CodeFence, FenceKind},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Text {
        kind: BlockKind,
        start: Span,
        lines: Vec<Span>,
        last_line_end: usize,
    },
    Fence {
        kind: FenceKind,
        info: String,
        start: Span,
        last_line_end: usize,
    },
}

/// Line-driven state machine that groups classified lines into blocks.
///
/// - inside a fence every line is raw until a bare closing fence
/// - a blank line ends the current block
/// - a fence or marker line (heading, list item, checkbox) opens a new block
/// - anything else continues the current block, unless that block is a
///   heading, in which case it starts a paragraph
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_text();
            return;
        }

        if let Some(open) = try_open_leaf(c) {
            self.flush_text();
            self.open_leaf(open, c);
            return;
        }

        self.extend_text(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_text();
        self.flush_unterminated_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        self.leaf = match open {
            BlockOpen::FencedCode { kind, info } => LeafState::Fence {
                kind,
                info,
                start: c.line,
                last_line_end: c.line.end,
            },
            BlockOpen::Marker(kind) => LeafState::Text {
                kind,
                start: c.line,
                lines: vec![c.content_span],
                last_line_end: c.line.end,
            },
        };
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind,
            info,
            start,
            last_line_end,
        } = &mut self.leaf
        else {
            return;
        };
        *last_line_end = c.line.end;

        if CodeFence::closes(*kind, c.fence_sig.as_ref()) {
            let node = fence_node(*kind, std::mem::take(info), *start, c.line.end, true);
            self.out.push(node);
            self.leaf = LeafState::None;
        }
    }

    fn extend_text(&mut self, c: &LineClass) {
        if let LeafState::Text {
            kind,
            lines,
            last_line_end,
            ..
        } = &mut self.leaf
            && kind.takes_continuation()
        {
            lines.push(c.content_span);
            *last_line_end = c.line.end;
            return;
        }

        self.flush_text();
        self.leaf = LeafState::Text {
            kind: BlockKind::Paragraph,
            start: c.line,
            lines: vec![c.content_span],
            last_line_end: c.line.end,
        };
    }

    fn flush_text(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Text {
            kind,
            start,
            lines,
            last_line_end,
        } = prev
        {
            self.out.push(BlockNode {
                kind,
                span: Span::new(start.start, last_line_end),
                content: ContentView::Lines(lines),
            });
        } else {
            self.leaf = prev; // put back non-text leaf (e.g. fence)
        }
    }

    fn flush_unterminated_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            kind,
            info,
            start,
            last_line_end,
        } = prev
        {
            // Closed implicitly at end of input.
            self.out
                .push(fence_node(kind, info, start, last_line_end, false));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn fence_node(kind: FenceKind, info: String, start: Span, end: usize, closed: bool) -> BlockNode {
    let span = Span::new(start.start, end);
    BlockNode {
        kind: BlockKind::FencedCode { kind, info, closed },
        span,
        content: ContentView::Contiguous(span),
    }
}
