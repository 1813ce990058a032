//! # Separator Rules
//!
//! The ordered, immutable rule set consulted by the block splitter and the
//! math formatter.
//!
//! ## Priority
//!
//! Rules are stored in evaluation order:
//!
//! 1. **Fence** (```` ``` ````, `~~~`): inside a fence nothing else applies
//! 2. **Block math** pair (`\[ … \]` by default)
//! 3. **Inline math** pair (`\( … \)` by default)
//! 4. **Line prefixes**: heading, checkbox, bullet list, ordered list
//!
//! Anything that matches none of them is plain text.
//!
//! A built rule set never changes and is `Send + Sync`, so one instance can
//! be shared across any number of pipelines.

mod delimiters;

pub use delimiters::{MathDelimiters, RuleSetConfig};

use regex::Regex;
use thiserror::Error;

use crate::parsing::blocks::kinds::{CodeFence, FenceKind, FenceSig, LinePrefix};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleSetError {
    #[error("the {0} delimiter must not be empty")]
    EmptyDelimiter(&'static str),

    #[error("inline and block math share the same {position} delimiter {delimiter:?}")]
    DelimiterCollision {
        position: &'static str,
        delimiter: String,
    },

    #[error("the canonical marker must not be whitespace")]
    WhitespaceMarker,

    #[error("invalid pattern for rule {name}: {source}")]
    InvalidPattern {
        name: &'static str,
        source: regex::Error,
    },
}

/// Which math construct a pair delimiter rule describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathKind {
    Block,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Fence(FenceKind),
    PairDelimiter(MathKind),
    LinePrefix(LinePrefix),
}

impl RuleKind {
    /// Lower runs first.
    pub fn priority(self) -> u8 {
        match self {
            RuleKind::Fence(_) => 0,
            RuleKind::PairDelimiter(MathKind::Block) => 1,
            RuleKind::PairDelimiter(MathKind::Inline) => 2,
            RuleKind::LinePrefix(_) => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RulePattern {
    /// A marker the line must start with.
    Literal(&'static str),
    /// An open/close delimiter pair.
    Pair { open: String, close: String },
    /// A compiled pattern anchored at the start of the line.
    Prefix(Regex),
}

#[derive(Debug, Clone)]
pub struct SeparatorRule {
    name: &'static str,
    kind: RuleKind,
    pattern: RulePattern,
}

impl SeparatorRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &RulePattern {
        &self.pattern
    }

    pub fn priority(&self) -> u8 {
        self.kind.priority()
    }
}

/// The immutable set of separator rules plus the output conventions that go
/// with them (canonical marker, math fence languages).
#[derive(Debug, Clone)]
pub struct SeparatorRuleSet {
    rules: Vec<SeparatorRule>,
    canonical_marker: char,
    math_fence_languages: Vec<String>,
}

impl SeparatorRuleSet {
    /// Builds the standard rule set around the given math delimiters.
    pub fn new(delimiters: MathDelimiters) -> Result<Self, RuleSetError> {
        Self::from_config(RuleSetConfig {
            delimiters,
            ..RuleSetConfig::default()
        })
    }

    pub fn from_config(config: RuleSetConfig) -> Result<Self, RuleSetError> {
        config.delimiters.validate()?;
        if config.canonical_marker.is_whitespace() {
            return Err(RuleSetError::WhitespaceMarker);
        }

        let d = config.delimiters;
        let mut rules = vec![
            SeparatorRule {
                name: "fence_backticks",
                kind: RuleKind::Fence(FenceKind::Backticks),
                pattern: RulePattern::Literal(CodeFence::BACKTICKS),
            },
            SeparatorRule {
                name: "fence_tildes",
                kind: RuleKind::Fence(FenceKind::Tildes),
                pattern: RulePattern::Literal(CodeFence::TILDES),
            },
            SeparatorRule {
                name: "block_math",
                kind: RuleKind::PairDelimiter(MathKind::Block),
                pattern: RulePattern::Pair {
                    open: d.block_start,
                    close: d.block_end,
                },
            },
            SeparatorRule {
                name: "inline_math",
                kind: RuleKind::PairDelimiter(MathKind::Inline),
                pattern: RulePattern::Pair {
                    open: d.inline_start,
                    close: d.inline_end,
                },
            },
        ];

        for prefix in LinePrefix::ALL {
            let name = prefix.rule_name();
            let regex = Regex::new(prefix.pattern())
                .map_err(|source| RuleSetError::InvalidPattern { name, source })?;
            rules.push(SeparatorRule {
                name,
                kind: RuleKind::LinePrefix(prefix),
                pattern: RulePattern::Prefix(regex),
            });
        }

        // Stable: equal priorities keep declaration order.
        rules.sort_by_key(SeparatorRule::priority);

        log::debug!(
            "built separator rule set with {} rules, marker {:?}",
            rules.len(),
            config.canonical_marker
        );

        Ok(Self {
            rules,
            canonical_marker: config.canonical_marker,
            math_fence_languages: config.math_fence_languages,
        })
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &[SeparatorRule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&SeparatorRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn canonical_marker(&self) -> char {
        self.canonical_marker
    }

    /// Open and close delimiters of the `kind` pair rule.
    pub fn pair(&self, kind: MathKind) -> Option<(&str, &str)> {
        self.rules.iter().find_map(|r| match (r.kind, &r.pattern) {
            (RuleKind::PairDelimiter(k), RulePattern::Pair { open, close }) if k == kind => {
                Some((open.as_str(), close.as_str()))
            }
            _ => None,
        })
    }

    /// First fence rule the line starts with. `remainder` has its
    /// indentation already removed.
    pub fn fence_sig(&self, remainder: &str) -> Option<FenceSig> {
        self.rules.iter().find_map(|r| match (r.kind, &r.pattern) {
            (RuleKind::Fence(kind), RulePattern::Literal(marker)) => {
                CodeFence::sig(kind, marker, remainder)
            }
            _ => None,
        })
    }

    /// First line-prefix rule matching `remainder`.
    pub fn line_prefix(&self, remainder: &str) -> Option<LinePrefix> {
        self.rules.iter().find_map(|r| match (&r.kind, &r.pattern) {
            (RuleKind::LinePrefix(prefix), RulePattern::Prefix(re)) if re.is_match(remainder) => {
                Some(*prefix)
            }
            _ => None,
        })
    }

    /// Whether a fence info string marks the block as math.
    pub fn is_math_fence(&self, info: &str) -> bool {
        let lang = info.split_whitespace().next().unwrap_or_default();
        !lang.is_empty()
            && self
                .math_fence_languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(lang))
    }
}
