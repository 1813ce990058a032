use super::text_block::TextBlock;

/// Inserts separators around enclosed math fragments.
///
/// Before an enclosed fragment a separator is added unless it is the first
/// fragment, the previous fragment ends its segment, or a separator is
/// already there. After it, unless it is the last fragment, the next fragment
/// starts a segment, or the next fragment is a separator.
///
/// Running this on its own output changes nothing.
pub fn normalize(parts: Vec<TextBlock>) -> Vec<TextBlock> {
    let mut out: Vec<TextBlock> = Vec::with_capacity(parts.len());
    let mut iter = parts.into_iter().peekable();

    while let Some(part) = iter.next() {
        if !part.is_enclosed() {
            out.push(part);
            continue;
        }

        let needs_before = out
            .last()
            .is_some_and(|prev| !prev.at_end() && !prev.is_separator());
        let needs_after = iter
            .peek()
            .is_some_and(|next| !next.at_start() && !next.is_separator());

        if needs_before {
            out.push(TextBlock::separator());
        }
        out.push(part);
        if needs_after {
            out.push(TextBlock::separator());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain(t: &str, s: bool, e: bool) -> TextBlock {
        TextBlock::plain(t, s, e)
    }

    fn math(t: &str, s: bool, e: bool) -> TextBlock {
        TextBlock::enclosed(t, s, e)
    }

    #[test]
    fn math_between_prose_is_isolated() {
        let out = normalize(vec![
            plain("a ", true, false),
            math("$x$", false, false),
            plain(" b", false, true),
        ]);
        assert_eq!(
            out,
            vec![
                plain("a ", true, false),
                TextBlock::separator(),
                math("$x$", false, false),
                TextBlock::separator(),
                plain(" b", false, true),
            ]
        );
    }

    #[test]
    fn natural_boundaries_need_no_separator() {
        let input = vec![
            plain("before", true, true),
            math("$$x$$", true, true),
            plain("after", true, true),
        ];
        assert_eq!(normalize(input.clone()), input);
    }

    #[test]
    fn first_and_last_fragment_overall() {
        let input = vec![math("$x$", true, false), plain(" tail", false, true)];
        assert_eq!(
            normalize(input),
            vec![
                math("$x$", true, false),
                TextBlock::separator(),
                plain(" tail", false, true),
            ]
        );

        let input = vec![plain("head ", true, false), math("$x$", false, true)];
        assert_eq!(
            normalize(input),
            vec![
                plain("head ", true, false),
                TextBlock::separator(),
                math("$x$", false, true),
            ]
        );
    }

    #[test]
    fn adjacent_math_gets_one_separator() {
        let out = normalize(vec![
            plain("a", true, false),
            math("$x$", false, false),
            math("$y$", false, true),
        ]);
        assert_eq!(
            out,
            vec![
                plain("a", true, false),
                TextBlock::separator(),
                math("$x$", false, false),
                TextBlock::separator(),
                math("$y$", false, true),
            ]
        );
    }

    #[test]
    fn idempotent() {
        let once = normalize(vec![
            plain("a", true, false),
            math("$x$", false, false),
            plain("b", false, false),
            math("$y$", false, false),
            math("$z$", false, true),
            plain("next", true, true),
        ]);
        assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn empty_input() {
        assert!(normalize(vec![]).is_empty());
    }
}
