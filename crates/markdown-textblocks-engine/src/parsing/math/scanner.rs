use crate::{
    parsing::rope::span::Span,
    rules::{MathKind, SeparatorRuleSet},
};

use super::cursor::Cursor;

/// States of the delimiter scanner.
///
/// `InFence` is terminal: fenced code is never scanned, so a scan that starts
/// there reports the segment as raw without looking at a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Plain,
    InInlineMath,
    InBlockMath,
    InFence,
}

impl ScanState {
    /// Where the scan of a segment begins.
    pub fn initial(atomic: bool) -> Self {
        if atomic {
            ScanState::InFence
        } else {
            ScanState::Plain
        }
    }

    fn inside(kind: MathKind) -> Self {
        match kind {
            MathKind::Block => ScanState::InBlockMath,
            MathKind::Inline => ScanState::InInlineMath,
        }
    }
}

/// A matched delimiter pair, with byte spans into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathSpan {
    pub kind: MathKind,
    /// Span including both delimiters.
    pub full: Span,
    /// Span between the delimiters.
    pub inner: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Fenced code; nothing was scanned.
    Raw,
    /// The first block math pair. Block math takes over the whole segment.
    Block(MathSpan),
    /// Every inline pair, left to right. Empty when the text has no math.
    Inline(Vec<MathSpan>),
}

/// Finds math delimiter pairs with an explicit state machine.
///
/// Pairs are leftmost and shortest: a pair closes at the first closing
/// delimiter after its opener. Block math may span lines, inline math may
/// not. An opener that never closes is plain text.
pub struct MathScanner<'r> {
    rules: &'r SeparatorRuleSet,
}

impl<'r> MathScanner<'r> {
    pub fn new(rules: &'r SeparatorRuleSet) -> Self {
        Self { rules }
    }

    pub fn scan(&self, text: &str, atomic: bool) -> ScanOutcome {
        if ScanState::initial(atomic) == ScanState::InFence {
            return ScanOutcome::Raw;
        }

        if let Some(block) = self.find_pairs(text, MathKind::Block, true).first() {
            return ScanOutcome::Block(*block);
        }
        ScanOutcome::Inline(self.find_pairs(text, MathKind::Inline, false))
    }

    fn find_pairs(&self, s: &str, kind: MathKind, first_only: bool) -> Vec<MathSpan> {
        let Some((open, close)) = self.rules.pair(kind) else {
            return vec![];
        };
        let mut cur = Cursor::new(s);
        let mut state = ScanState::Plain;
        let mut open_at = 0;
        let mut inner_start = 0;
        let mut out = vec![];

        while !cur.eof() {
            match state {
                ScanState::Plain => {
                    if cur.starts_with(open) {
                        open_at = cur.pos();
                        cur.bump_n(open.len());
                        inner_start = cur.pos();
                        state = ScanState::inside(kind);
                    } else {
                        cur.bump();
                    }
                }
                ScanState::InInlineMath | ScanState::InBlockMath => {
                    if cur.starts_with(close) {
                        let inner_end = cur.pos();
                        cur.bump_n(close.len());
                        out.push(MathSpan {
                            kind,
                            full: Span::new(open_at, cur.pos()),
                            inner: Span::new(inner_start, inner_end),
                        });
                        if first_only {
                            break;
                        }
                        state = ScanState::Plain;
                    } else if state == ScanState::InInlineMath && cur.peek() == Some('\n') {
                        // No opener between here and the failed one can close
                        // on this line either; resume at the newline.
                        state = ScanState::Plain;
                    } else {
                        cur.bump();
                    }
                }
                ScanState::InFence => break,
            }
        }

        out
    }
}
