pub mod code_fence;
pub mod line_prefix;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use line_prefix::LinePrefix;
