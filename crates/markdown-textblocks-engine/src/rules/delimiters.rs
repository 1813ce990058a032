use serde::{Deserialize, Serialize};

use super::RuleSetError;

/// The four math delimiter strings.
///
/// Field names match the keys of the `[delimiters]` table in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathDelimiters {
    pub inline_start: String,
    pub inline_end: String,
    pub block_start: String,
    pub block_end: String,
}

impl MathDelimiters {
    pub const INLINE_START: &'static str = r"\(";
    pub const INLINE_END: &'static str = r"\)";
    pub const BLOCK_START: &'static str = r"\[";
    pub const BLOCK_END: &'static str = r"\]";

    /// Rejects empty delimiters and inline/block pairs sharing a delimiter.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        for (position, value) in [
            ("inline start", &self.inline_start),
            ("inline end", &self.inline_end),
            ("block start", &self.block_start),
            ("block end", &self.block_end),
        ] {
            if value.is_empty() {
                return Err(RuleSetError::EmptyDelimiter(position));
            }
        }
        if self.inline_start == self.block_start {
            return Err(RuleSetError::DelimiterCollision {
                position: "start",
                delimiter: self.inline_start.clone(),
            });
        }
        if self.inline_end == self.block_end {
            return Err(RuleSetError::DelimiterCollision {
                position: "end",
                delimiter: self.inline_end.clone(),
            });
        }
        Ok(())
    }
}

impl Default for MathDelimiters {
    fn default() -> Self {
        Self {
            inline_start: Self::INLINE_START.to_string(),
            inline_end: Self::INLINE_END.to_string(),
            block_start: Self::BLOCK_START.to_string(),
            block_end: Self::BLOCK_END.to_string(),
        }
    }
}

/// Everything needed to build a [`super::SeparatorRuleSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetConfig {
    pub delimiters: MathDelimiters,
    /// Replaces math delimiters in emitted fragments.
    pub canonical_marker: char,
    /// Fence info strings that mark a fenced block as math (```` ```math ````).
    pub math_fence_languages: Vec<String>,
}

impl RuleSetConfig {
    pub const DEFAULT_MARKER: char = '$';
    pub const DEFAULT_MATH_FENCE: &'static str = "math";
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            delimiters: MathDelimiters::default(),
            canonical_marker: Self::DEFAULT_MARKER,
            math_fence_languages: vec![Self::DEFAULT_MATH_FENCE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MathDelimiters::default().validate().is_ok());
    }

    #[test]
    fn empty_delimiter_rejected() {
        let d = MathDelimiters {
            block_end: String::new(),
            ..MathDelimiters::default()
        };
        assert_eq!(
            d.validate(),
            Err(RuleSetError::EmptyDelimiter("block end"))
        );
    }

    #[test]
    fn identical_pairs_rejected() {
        let d = MathDelimiters {
            block_start: r"\(".into(),
            block_end: r"\)".into(),
            ..MathDelimiters::default()
        };
        assert!(matches!(
            d.validate(),
            Err(RuleSetError::DelimiterCollision {
                position: "start",
                ..
            })
        ));
    }

    #[test]
    fn dollar_style_delimiters_are_distinct() {
        let d = MathDelimiters {
            inline_start: "$".into(),
            inline_end: "$".into(),
            block_start: "$$".into(),
            block_end: "$$".into(),
        };
        assert!(d.validate().is_ok());
    }
}
