//! Rule application
//!
//! `apply` runs every rule of a table over one block, in table order,
//! painting each match over a per-byte style buffer. Later rules overwrite
//! earlier ones, so the final buffer holds the resolved style of every
//! byte. The buffer is then folded into spans.

use super::rules::RuleTable;
use super::style::{Span, Style};

/// Resolved styling for one block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanResult {
    /// Non-overlapping spans in ascending offset order
    pub spans: Vec<Span>,
}

impl SpanResult {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Style at a byte offset, if any rule claimed it
    pub fn style_at(&self, pos: usize) -> Option<Style> {
        self.spans.iter().find(|s| s.contains(pos)).map(|s| s.style)
    }
}

impl<'a> IntoIterator for &'a SpanResult {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Highlight one block with a rule table
///
/// Never fails: a rule without matches simply paints nothing.
pub fn apply(table: &RuleTable, text: &str) -> SpanResult {
    if text.is_empty() {
        return SpanResult::default();
    }

    let mut slots: Vec<Option<Style>> = vec![None; text.len()];

    for rule in table {
        let style = rule.style();
        let mut pos = 0;

        while let Some(m) = rule.find_at(text, pos) {
            if let Some(range) = m.styled {
                for slot in &mut slots[range] {
                    *slot = Some(style);
                }
            }

            // An empty match must still move the search forward
            pos = if m.whole.is_empty() {
                match text[m.whole.end..].chars().next() {
                    Some(ch) => m.whole.end + ch.len_utf8(),
                    None => break,
                }
            } else {
                m.whole.end
            };
        }
    }

    SpanResult {
        spans: coalesce(&slots),
    }
}

/// Fold runs of equal styles into spans
fn coalesce(slots: &[Option<Style>]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut run: Option<(usize, Style)> = None;

    for (pos, slot) in slots.iter().enumerate() {
        match (run, slot) {
            (Some((_, current)), Some(style)) if current == *style => {}
            _ => {
                if let Some((start, style)) = run.take() {
                    spans.push(Span::new(start, pos - start, style));
                }
                run = slot.map(|style| (pos, style));
            }
        }
    }

    if let Some((start, style)) = run {
        spans.push(Span::new(start, slots.len() - start, style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::Rule;
    use crate::syntax::tokens::TokenType;

    fn table() -> RuleTable {
        RuleTable::new(vec![
            Rule::new("Test", "keyword", r"\b(?:if|return)\b", 0, TokenType::Keyword).unwrap(),
            Rule::new("Test", "call", r"\b([A-Za-z0-9_]+)\(", 1, TokenType::Function).unwrap(),
            Rule::new("Test", "comment", r"#[^\n]*", 0, TokenType::Comment).unwrap(),
            Rule::new("Test", "string", r#"".*?""#, 0, TokenType::String).unwrap(),
        ])
    }

    fn keyword() -> Style {
        TokenType::Keyword.default_style()
    }

    #[test]
    fn test_empty_block() {
        assert!(apply(&table(), "").is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(apply(&table(), "x = 1").is_empty());
    }

    #[test]
    fn test_every_match_is_painted() {
        let result = apply(&table(), "if a: return b");
        assert_eq!(
            result.spans,
            vec![Span::new(0, 2, keyword()), Span::new(6, 6, keyword())]
        );
    }

    #[test]
    fn test_later_rule_wins() {
        let text = r#"x = "return" # if"#;
        let result = apply(&table(), text);
        let string = TokenType::String.default_style();
        let comment = TokenType::Comment.default_style();

        assert_eq!(result.style_at(4), Some(string));
        assert_eq!(result.style_at(6), Some(string));
        assert_eq!(result.style_at(11), Some(string));
        assert_eq!(result.style_at(13), Some(comment));
        assert_eq!(result.style_at(15), Some(comment));
        assert_eq!(result.style_at(0), None);
    }

    #[test]
    fn test_group_styles_only_identifier() {
        let result = apply(&table(), "foo(bar(1))");
        let function = TokenType::Function.default_style();
        assert_eq!(
            result.spans,
            vec![Span::new(0, 3, function), Span::new(4, 3, function)]
        );
        assert_eq!(result.style_at(3), None);
    }

    #[test]
    fn test_adjacent_equal_styles_coalesce() {
        let table = RuleTable::new(vec![
            Rule::new("Test", "letters", r"[a-z]", 0, TokenType::Keyword).unwrap(),
        ]);
        assert_eq!(apply(&table, "abc").spans, vec![Span::new(0, 3, keyword())]);
    }

    #[test]
    fn test_empty_matches_terminate() {
        let table = RuleTable::new(vec![
            Rule::new("Test", "maybe", r"x*", 0, TokenType::Keyword).unwrap(),
        ]);
        let result = apply(&table, "héxx");
        assert_eq!(result.spans, vec![Span::new(3, 2, keyword())]);
    }

    #[test]
    fn test_multibyte_text() {
        let result = apply(&table(), "é = \"ü\" # ß");
        for span in &result {
            assert!("é = \"ü\" # ß".is_char_boundary(span.start));
            assert!("é = \"ü\" # ß".is_char_boundary(span.end()));
        }
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let text = r#"if f(x): return "a" # b"#;
        assert_eq!(apply(&table(), text), apply(&table(), text));
    }
}
