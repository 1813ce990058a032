use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the input with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

impl LineRef {
    /// Line text with the trailing `\n` / `\r\n` removed.
    pub fn without_newline(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so offsets stay exact across `\n` and `\r\n` endings.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
