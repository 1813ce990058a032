//! # Fragments
//!
//! The output unit [`TextBlock`] and the separator pass that runs over the
//! concatenated fragments of every segment.

pub mod normalize;
pub mod text_block;

pub use normalize::normalize;
pub use text_block::{FragmentError, TextBlock};

/// Fragments that carry text, skipping synthetic separators.
pub fn without_separators(blocks: &[TextBlock]) -> impl Iterator<Item = &TextBlock> {
    blocks.iter().filter(|b| !b.is_separator())
}
