pub mod blocks;
pub mod math;
pub mod rope;
pub mod segment;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::rules::SeparatorRuleSet;
use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

pub use math::format_segment;
pub use segment::Segment;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Splits the rope into blocks, one line at a time.
pub fn parse_document(rope: &Rope, rules: &SeparatorRuleSet) -> ParsedDoc {
    let classifier = MarkdownLineClassifier::new(rules);
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Structural segments of the rope, in source order.
pub fn parse_segments(rope: &Rope, rules: &SeparatorRuleSet) -> Vec<Segment> {
    parse_document(rope, rules)
        .blocks
        .iter()
        .filter_map(|b| Segment::from_block(rope, b))
        .collect()
}
