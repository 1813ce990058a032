use crate::{
    fragments::TextBlock,
    parsing::{blocks::BlockKind, segment::Segment},
    rules::SeparatorRuleSet,
};

use super::{
    cursor::Cursor,
    scanner::{MathScanner, MathSpan, ScanOutcome},
};

/// Turns one segment into fragments, before separators are inserted.
///
/// - fenced code: one plain fragment, verbatim; a math fence
///   (```` ```math ````) is one enclosed fragment instead
/// - block math anywhere: the whole segment is one enclosed fragment with
///   every block delimiter replaced by the canonical marker
/// - otherwise: prose and inline math alternate, each math fragment wrapped
///   in the canonical marker
///
/// The first fragment is flagged `at_start` and the last `at_end`.
pub fn format_segment(segment: &Segment, rules: &SeparatorRuleSet) -> Vec<TextBlock> {
    let text = segment.text();
    if text.is_empty() {
        return vec![];
    }
    let marker = rules.canonical_marker();

    let parts = match MathScanner::new(rules).scan(text, segment.is_atomic()) {
        ScanOutcome::Raw => vec![format_fence(segment, rules)],
        ScanOutcome::Block(m) => {
            let open = &text[m.full.start..m.inner.start];
            let close = &text[m.inner.end..m.full.end];
            vec![TextBlock::enclosed(
                replace_delimiters(text, open, close, marker),
                true,
                true,
            )]
        }
        ScanOutcome::Inline(spans) => split_inline(text, &spans, marker),
    };

    log::trace!(
        "segment {:?} at {:?} -> {} fragments",
        segment.kind(),
        segment.span(),
        parts.len()
    );
    parts
}

fn format_fence(segment: &Segment, rules: &SeparatorRuleSet) -> TextBlock {
    let text = segment.text();
    match segment.kind() {
        BlockKind::FencedCode { info, closed, .. } if rules.is_math_fence(info) => {
            let marker = rules.canonical_marker();
            TextBlock::enclosed(
                format!("{marker}{}{marker}", fence_interior(text, *closed)),
                true,
                true,
            )
        }
        _ => TextBlock::plain(text, true, true),
    }
}

/// Lines between the fences, trimmed.
fn fence_interior(text: &str, closed: bool) -> String {
    let lines: Vec<&str> = text.lines().skip(1).collect();
    let body = match (closed, lines.split_last()) {
        (true, Some((_, body))) => body,
        _ => &lines[..],
    };
    body.join("\n").trim().to_string()
}

/// Single left-to-right pass replacing each `open` and `close` with `marker`.
fn replace_delimiters(text: &str, open: &str, close: &str, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cur = Cursor::new(text);
    while !cur.eof() {
        if cur.starts_with(open) {
            out.push(marker);
            cur.bump_n(open.len());
        } else if cur.starts_with(close) {
            out.push(marker);
            cur.bump_n(close.len());
        } else if let Some(c) = cur.bump() {
            out.push(c);
        }
    }
    out
}

fn split_inline(text: &str, spans: &[MathSpan], marker: char) -> Vec<TextBlock> {
    if spans.is_empty() {
        return vec![TextBlock::plain(text, true, true)];
    }

    let mut parts = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last_end = 0;

    for m in spans {
        if m.full.start > last_end {
            parts.push(TextBlock::plain(
                &text[last_end..m.full.start],
                last_end == 0,
                false,
            ));
        }
        let inner = &text[m.inner.start..m.inner.end];
        parts.push(TextBlock::enclosed(
            format!("{marker}{inner}{marker}"),
            m.full.start == 0,
            false,
        ));
        last_end = m.full.end;
    }

    if last_end < text.len() {
        parts.push(TextBlock::plain(&text[last_end..], false, true));
    } else if let Some(last) = parts.last_mut() {
        last.mark_at_end();
    }

    parts
}
