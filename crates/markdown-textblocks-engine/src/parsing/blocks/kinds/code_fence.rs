use serde::Serialize;

/// Which fence character a fenced code block was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that starts with a fence marker, with whatever follows the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Info string after the marker (`rust` in ```` ```rust ````), trimmed.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Matches `remainder` (a line with its indentation removed) against a
    /// fence `marker` of `kind`.
    ///
    /// A backtick fence whose info string holds a backtick is not a fence:
    /// ```` ```ls``` lists files ```` is prose opening with a code span.
    pub fn sig(kind: FenceKind, marker: &str, remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let rest = t.strip_prefix(marker)?;
        let fence_char = marker.chars().next()?;
        let info = rest.trim_start_matches(fence_char).trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            info: info.to_string(),
        })
    }

    /// A fence closes on a bare marker line of the same fence character.
    pub fn closes(open: FenceKind, sig: Option<&FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == open && s.info.is_empty())
    }
}
