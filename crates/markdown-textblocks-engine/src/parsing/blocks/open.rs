use super::{
    classify::LineClass,
    kinds::{FenceKind, LinePrefix},
    types::BlockKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind, info: String },
    Marker(BlockKind),
}

/// Detects a line that must start a new block.
///
/// Precedence: fence beats every line prefix.
pub fn try_open_leaf(c: &LineClass) -> Option<BlockOpen> {
    if let Some(sig) = &c.fence_sig {
        return Some(BlockOpen::FencedCode {
            kind: sig.kind,
            info: sig.info.clone(),
        });
    }
    let kind = match c.prefix? {
        LinePrefix::Heading => BlockKind::Heading {
            level: LinePrefix::heading_level(&c.content_text),
        },
        LinePrefix::Checkbox => BlockKind::Checkbox {
            checked: LinePrefix::is_checked(&c.content_text),
        },
        LinePrefix::BulletList => BlockKind::ListItem { ordered: false },
        LinePrefix::OrderedList => BlockKind::ListItem { ordered: true },
    };
    Some(BlockOpen::Marker(kind))
}
