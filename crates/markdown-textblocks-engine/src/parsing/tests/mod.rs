//! Tests for block splitting and per-segment formatting.


use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::{
    parsing::{
        Segment,
        blocks::{BlockKind, kinds::FenceKind},
        format_segment, parse_segments,
        rope::span::Span,
    },
    rules::{MathDelimiters, SeparatorRuleSet},
};

fn rules() -> SeparatorRuleSet {
    SeparatorRuleSet::new(MathDelimiters::default()).unwrap()
}

fn segments(md: &str) -> Vec<Segment> {
    parse_segments(&Rope::from(md), &rules())
}

fn texts(md: &str) -> Vec<String> {
    segments(md).iter().map(|s| s.text().to_string()).collect()
}

#[test]
fn paragraph_lines_join() {
    assert_eq!(texts("first line\n  second line  \n"), vec!["first line\nsecond line"]);
}

#[test]
fn blank_lines_separate_and_collapse() {
    assert_eq!(texts("a\n\n\n   \n\nb\n\n"), vec!["a", "b"]);
}

#[test]
fn every_list_item_is_its_own_segment() {
    let segs = segments("1. one\n2. two\n- three\n* four\n");
    assert_eq!(segs.len(), 4);
    assert!(segs.iter().take(2).all(|s| *s.kind() == BlockKind::ListItem { ordered: true }));
    assert!(segs.iter().skip(2).all(|s| *s.kind() == BlockKind::ListItem { ordered: false }));
}

#[test]
fn continuation_lines_stay_with_list_item() {
    assert_eq!(
        texts("- item\n  wrapped text\nmore\n- next"),
        vec!["- item\nwrapped text\nmore", "- next"]
    );
}

#[test]
fn marker_after_paragraph_starts_new_segment() {
    assert_eq!(
        texts("To compute the utility:\n1. Start\n2. Repeat"),
        vec!["To compute the utility:", "1. Start", "2. Repeat"]
    );
}

#[test]
fn heading_is_a_single_line() {
    let segs = segments("### Iterative Update\nbody text\nmore body");
    assert_eq!(segs.len(), 2);
    assert_eq!(*segs[0].kind(), BlockKind::Heading { level: 3 });
    assert_eq!(segs[0].text(), "### Iterative Update");
    assert_eq!(*segs[1].kind(), BlockKind::Paragraph);
    assert_eq!(segs[1].text(), "body text\nmore body");
}

#[test]
fn checkboxes() {
    let segs = segments("[ ] open\n[x] done\nwith detail");
    assert_eq!(segs.len(), 2);
    assert_eq!(*segs[0].kind(), BlockKind::Checkbox { checked: false });
    assert_eq!(*segs[1].kind(), BlockKind::Checkbox { checked: true });
    assert_eq!(segs[1].text(), "[x] done\nwith detail");
}

#[test]
fn fence_is_raw_and_interrupts_paragraph() {
    let md = "intro\n```rust\nfn x() {}\n\n- not a list\n\\( not math \\)\n```\nafter";
    let segs = segments(md);
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0].text(), "intro");
    assert_eq!(
        *segs[1].kind(),
        BlockKind::FencedCode {
            kind: FenceKind::Backticks,
            info: "rust".into(),
            closed: true,
        }
    );
    assert_eq!(
        segs[1].text(),
        "```rust\nfn x() {}\n\n- not a list\n\\( not math \\)\n```"
    );
    assert_eq!(segs[2].text(), "after");
}

#[test]
fn fence_keeps_interior_indentation() {
    let segs = segments("    ```\n    def f():\n        return 1\n    ```\n");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].text(), "```\n    def f():\n        return 1\n    ```");
}

#[test]
fn unterminated_fence_closes_at_end_of_input() {
    let segs = segments("text\n```\ncode\n- x\n\n");
    assert_eq!(segs.len(), 2);
    assert!(segs[1].is_atomic());
    assert!(matches!(
        segs[1].kind(),
        BlockKind::FencedCode { closed: false, .. }
    ));
    assert_eq!(segs[1].text(), "```\ncode\n- x");
}

#[test]
fn fence_only_closes_on_bare_matching_marker() {
    assert_eq!(texts("```\n```python\nstill code\n```").len(), 1);
    assert_eq!(texts("~~~\n```\nstill code\n~~~\nafter"), vec!["~~~\n```\nstill code\n~~~", "after"]);
}

#[test]
fn leading_code_span_is_not_a_fence() {
    let segs = segments("```ls``` lists files\n\nThen \\(x\\) holds.\n- item");
    assert_eq!(segs.len(), 3);
    assert_eq!(*segs[0].kind(), BlockKind::Paragraph);
    assert_eq!(segs[0].text(), "```ls``` lists files");
    assert_eq!(*segs[2].kind(), BlockKind::ListItem { ordered: false });

    let parts = format_segment(&segs[1], &rules());
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1].text(), "$x$");
    assert!(parts[1].is_enclosed());
}

#[test]
fn longer_fence_closes_on_bare_triple_backticks() {
    let segs = segments("````\ncode\n```\nafter");
    assert_eq!(segs.len(), 2);
    assert!(matches!(
        segs[0].kind(),
        BlockKind::FencedCode { closed: true, .. }
    ));
    assert_eq!(segs[0].text(), "````\ncode\n```");
    assert_eq!(segs[1].text(), "after");
}

#[test]
fn crlf_line_endings() {
    assert_eq!(texts("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
}

#[test]
fn segment_spans_cover_source_lines() {
    let segs = segments("a\n\n- b\n  c\n");
    assert_eq!(segs[0].span(), Span::new(0, 2));
    assert_eq!(segs[1].span(), Span::new(3, 11));
}

#[test]
fn empty_document() {
    assert!(segments("").is_empty());
    assert!(segments("\n\n\n").is_empty());
}

#[test]
fn mixed_markdown_separators() {
    let md = r#"
    Das ist ein Beispieltext.

    - This is some list element.
     This is a new line
    # Heading 1
    - Weitere Informationen,
    die nützlich sind.

    Block which should be separated
    [ ] Checkbox 1
    [ ] Checkbox 2
    extra text for second checkbox

    [ ] Checkbox 3

    - list 1
    - list 2
    extra list text

    New block with random text


    ```
    - list in code block

    - list in code block 2
    [ ] Checkbox in code block
    def actual_code_block():
        return True
    ```
    Random Text 2
    text with a minus - inside
    * new list
    - list with other starter
    * list with random text
    extra line

    last single block of text

        "#;

    let got = texts(md);
    assert_eq!(got.len(), 17);
    assert_eq!(got[1], "- This is some list element.\nThis is a new line");
    assert_eq!(got[2], "# Heading 1");
    assert_eq!(got[3], "- Weitere Informationen,\ndie nützlich sind.");
    assert_eq!(got[6], "[ ] Checkbox 2\nextra text for second checkbox");
    assert!(got[11].starts_with("```\n    - list in code block\n\n"));
    assert!(got[11].ends_with("return True\n    ```"));
    assert_eq!(got[12], "Random Text 2\ntext with a minus - inside");
    assert_eq!(got[15], "* list with random text\nextra line");
    assert_eq!(got[16], "last single block of text");
}

#[test]
fn every_segment_run_has_one_start_and_one_end() {
    let md = "\\(a\\) lead\n\nmid \\(b\\)\\(c\\) tail\n\ntrail \\(d\\)\n\n\\[ e \\]\n\n```\nx\n```\n\nplain";
    let rules = rules();
    for seg in parse_segments(&Rope::from(md), &rules) {
        invariants::check_run(&format_segment(&seg, &rules));
    }
}
