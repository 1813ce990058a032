use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("an empty fragment cannot be math or a segment boundary")]
    FlaggedEmpty,
}

/// One annotated fragment of output text.
///
/// Empty fragments with every flag cleared are synthetic separators that
/// mark a prose/math transition. Any other empty fragment is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    text: String,
    at_start: bool,
    is_enclosed: bool,
    at_end: bool,
}

impl TextBlock {
    pub fn new(
        text: impl Into<String>,
        at_start: bool,
        is_enclosed: bool,
        at_end: bool,
    ) -> Result<Self, FragmentError> {
        let text = text.into();
        if text.is_empty() && (at_start || is_enclosed || at_end) {
            return Err(FragmentError::FlaggedEmpty);
        }
        Ok(Self {
            text,
            at_start,
            is_enclosed,
            at_end,
        })
    }

    /// The synthetic transition marker.
    pub fn separator() -> Self {
        Self {
            text: String::new(),
            at_start: false,
            is_enclosed: false,
            at_end: false,
        }
    }

    pub(crate) fn plain(text: impl Into<String>, at_start: bool, at_end: bool) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "plain fragments carry text");
        Self {
            text,
            at_start,
            is_enclosed: false,
            at_end,
        }
    }

    pub(crate) fn enclosed(text: impl Into<String>, at_start: bool, at_end: bool) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "math fragments carry their markers");
        Self {
            text,
            at_start,
            is_enclosed: true,
            at_end,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn at_start(&self) -> bool {
        self.at_start
    }

    pub fn is_enclosed(&self) -> bool {
        self.is_enclosed
    }

    pub fn at_end(&self) -> bool {
        self.at_end
    }

    pub fn is_separator(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn mark_at_end(&mut self) {
        self.at_end = true;
    }
}
