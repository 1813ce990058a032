//! # Math Formatting
//!
//! Finds math delimiters inside a segment and splits it into fragments.
//!
//! ## Modules
//!
//! - **`cursor`**: char-boundary-safe `Cursor`
//! - **`scanner`**: `MathScanner` state machine (`Plain`, `InInlineMath`,
//!   `InBlockMath`, `InFence`)
//! - **`formatter`**: `format_segment()` producing `TextBlock`s
//!
//! ## Precedence
//!
//! Fence > block math > inline math. A fenced segment is never scanned, and a
//! single block math pair turns the whole segment into one math fragment.

pub mod cursor;
pub mod formatter;
pub mod scanner;

pub use formatter::format_segment;
pub use scanner::{MathScanner, MathSpan, ScanOutcome, ScanState};
