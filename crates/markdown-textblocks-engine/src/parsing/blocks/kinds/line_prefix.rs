/// Structural markers recognised at the start of a line.
///
/// Each variant owns its rule name and pattern; the rule set compiles the
/// patterns once and the classifier only ever asks it which variant matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePrefix {
    /// `#` to `######` followed by whitespace or end of line.
    Heading,
    /// `[ ]`, `[x]` or `[X]`, optionally after a bullet (`- [ ] task`).
    Checkbox,
    /// `-`, `*` or `+` followed by whitespace.
    BulletList,
    /// Digits followed by `.` (`1. item`).
    OrderedList,
}

impl LinePrefix {
    /// Evaluation order. Checkbox precedes bullet so `- [ ] x` is a checkbox.
    pub const ALL: [LinePrefix; 4] = [
        LinePrefix::Heading,
        LinePrefix::Checkbox,
        LinePrefix::BulletList,
        LinePrefix::OrderedList,
    ];

    pub fn rule_name(self) -> &'static str {
        match self {
            LinePrefix::Heading => "heading",
            LinePrefix::Checkbox => "checkbox",
            LinePrefix::BulletList => "bullet_list",
            LinePrefix::OrderedList => "ordered_list",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            LinePrefix::Heading => r"^#{1,6}(?:\s|$)",
            LinePrefix::Checkbox => r"^(?:[-*+]\s+)?\[[ xX]\](?:\s|$)",
            LinePrefix::BulletList => r"^[-*+]\s",
            LinePrefix::OrderedList => r"^\d+\.(?:\s|$)",
        }
    }

    /// Number of leading `#` characters.
    pub fn heading_level(line: &str) -> u8 {
        line.bytes().take_while(|b| *b == b'#').count().min(6) as u8
    }

    /// Whether a checkbox line is ticked.
    pub fn is_checked(line: &str) -> bool {
        let rest = line.trim_start_matches(['-', '*', '+']).trim_start();
        rest.starts_with("[x]") || rest.starts_with("[X]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_counts_hashes() {
        assert_eq!(LinePrefix::heading_level("### Title"), 3);
        assert_eq!(LinePrefix::heading_level("#"), 1);
    }

    #[test]
    fn checkbox_state() {
        assert!(LinePrefix::is_checked("[x] done"));
        assert!(LinePrefix::is_checked("- [X] done"));
        assert!(!LinePrefix::is_checked("[ ] open"));
    }
}
