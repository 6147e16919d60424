//! Token types for syntax highlighting
//!
//! This module defines the lexical categories a rule can assign and
//! their default visual styles.

use super::style::{Color, Style};

/// Lexical categories, in the order a rule table layers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Reserved words (if, return, class, ...)
    Keyword,
    /// A class declaration: the introducer and the declared name
    Class,
    /// An identifier immediately followed by `(`
    Function,
    /// Single-line comments (# or //)
    Comment,
    /// String literals
    String,
}

impl TokenType {
    /// All categories in canonical layering order
    pub const ALL: [TokenType; 5] = [
        TokenType::Keyword,
        TokenType::Class,
        TokenType::Function,
        TokenType::Comment,
        TokenType::String,
    ];

    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Keyword => Style::fg(Color::Blue),
            TokenType::Class => Style::fg(Color::Magenta),
            TokenType::Function => Style::fg(Color::Cyan),
            TokenType::Comment => Style::fg(Color::Green).with_italic(),
            TokenType::String => Style::fg(Color::Yellow),
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "Keyword",
            TokenType::Class => "Class",
            TokenType::Function => "Function",
            TokenType::Comment => "Comment",
            TokenType::String => "String",
        }
    }

    /// Parse a token type from its name
    pub fn from_name(name: &str) -> Option<Self> {
        TokenType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_are_distinct() {
        for (i, a) in TokenType::ALL.iter().enumerate() {
            assert!(!a.default_style().is_default());
            for b in &TokenType::ALL[i + 1..] {
                assert_ne!(a.default_style(), b.default_style());
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(TokenType::from_name("Comment"), Some(TokenType::Comment));
        assert_eq!(TokenType::from_name("string"), Some(TokenType::String));
        assert_eq!(TokenType::from_name("Number"), None);
        assert_eq!(TokenType::from_name(""), None);
    }
}
