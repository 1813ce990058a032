use std::sync::Arc;

use xi_rope::Rope;

use crate::{
    fragments::{TextBlock, normalize},
    parsing::{Segment, format_segment, parse_segments},
    rules::{MathDelimiters, RuleSetError, SeparatorRuleSet},
};

/// Text in, annotated fragments out.
///
/// Holds nothing but the shared rule set, so a pipeline can be cloned freely
/// and used from several threads at once.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rules: Arc<SeparatorRuleSet>,
}

impl Pipeline {
    pub fn new(rules: Arc<SeparatorRuleSet>) -> Self {
        Self { rules }
    }

    /// Pipeline over the standard `\( \)` / `\[ \]` delimiters.
    pub fn with_default_rules() -> Result<Self, RuleSetError> {
        Ok(Self::new(Arc::new(SeparatorRuleSet::new(
            MathDelimiters::default(),
        )?)))
    }

    pub fn segments(&self, text: &str) -> Vec<Segment> {
        parse_segments(&Rope::from(text), &self.rules)
    }

    pub fn process(&self, text: &str) -> Vec<TextBlock> {
        process_markdown_text(text, &self.rules)
    }
}

/// Runs the whole pipeline: split, format each segment, insert separators.
pub fn process_markdown_text(text: &str, rules: &SeparatorRuleSet) -> Vec<TextBlock> {
    let rope = Rope::from(text);
    let segments = parse_segments(&rope, rules);

    let parts: Vec<TextBlock> = segments
        .iter()
        .flat_map(|s| format_segment(s, rules))
        .collect();
    let blocks = normalize(parts);

    log::debug!(
        "processed {} bytes into {} segments and {} text blocks",
        text.len(),
        segments.len(),
        blocks.len()
    );
    blocks
}
