use crate::{
    parsing::rope::{lines::LineRef, span::Span},
    rules::SeparatorRuleSet,
};

use super::kinds::{FenceSig, LinePrefix};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block splitting: each line is classified independently
/// against the rule set, without reference to surrounding lines.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is empty or whitespace only.
    pub is_blank: bool,
    /// Byte span of the line with surrounding whitespace removed.
    pub content_span: Span,
    /// Text of `content_span`.
    pub content_text: String,
    /// Set when the content starts with a fence marker.
    pub fence_sig: Option<FenceSig>,
    /// Structural marker, only computed for lines that are not fences.
    pub prefix: Option<LinePrefix>,
}

/// Classifies individual lines for the block splitting phase.
pub struct MarkdownLineClassifier<'r> {
    rules: &'r SeparatorRuleSet,
}

impl<'r> MarkdownLineClassifier<'r> {
    pub fn new(rules: &'r SeparatorRuleSet) -> Self {
        Self { rules }
    }

    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let raw = lr.without_newline();
        let content = raw.trim();
        let indent = raw.len() - raw.trim_start().len();

        let content_start = lr.span.start + indent;
        let fence_sig = self.rules.fence_sig(content);
        let prefix = match fence_sig {
            Some(_) => None,
            None => self.rules.line_prefix(content),
        };

        LineClass {
            line: lr.span,
            is_blank: content.is_empty(),
            content_span: Span::new(content_start, content_start + content.len()),
            content_text: content.to_string(),
            fence_sig,
            prefix,
        }
    }
}
