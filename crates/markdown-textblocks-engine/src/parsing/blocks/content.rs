//! Content projection for blocks.
//!
//! Plain blocks are assembled from lines whose indentation and trailing
//! whitespace are not part of the text; fenced blocks are taken verbatim.

use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

/// How a block's text is represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// Verbatim source (fenced code).
    Contiguous(Span),
    /// Per-line content spans, surrounding whitespace already stripped,
    /// joined with `\n` (paragraphs, list items, headings).
    Lines(Vec<Span>),
}

impl ContentView {
    /// Materialises the block text.
    #[must_use]
    pub fn join_content(&self, rope: &Rope) -> String {
        match self {
            ContentView::Contiguous(span) => slice_to_string(rope, *span),
            ContentView::Lines(lines) => lines
                .iter()
                .map(|line| slice_to_string(rope, *line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_strips_indentation() {
        let rope = Rope::from("  - item\n    more\n");
        let view = ContentView::Lines(vec![Span::new(2, 8), Span::new(13, 17)]);
        assert_eq!(view.join_content(&rope), "- item\nmore");
    }

    #[test]
    fn contiguous_is_verbatim() {
        let rope = Rope::from("```\n  x\n```\n");
        let view = ContentView::Contiguous(Span::new(0, 12));
        assert_eq!(view.join_content(&rope), "```\n  x\n```\n");
    }

    #[test]
    fn empty_lines_view() {
        let rope = Rope::from("text");
        assert_eq!(ContentView::Lines(vec![]).join_content(&rope), "");
    }
}
