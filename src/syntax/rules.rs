//! Pattern rules for syntax highlighting
//!
//! A `Rule` pairs a compiled regex with the style its matches receive.
//! A `RuleTable` is the ordered, immutable list of rules for one language;
//! rules later in the table win where their matches overlap earlier ones.

use std::ops::Range;

use regex::Regex;

use super::style::Style;
use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// A single pattern rule
///
/// The pattern is compiled once, when the rule is built.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging and error reports
    name: String,
    /// Compiled regex pattern
    pattern: Regex,
    /// Capture group that receives the style (0 = whole match)
    group: usize,
    /// Category this rule assigns
    token_type: TokenType,
    /// Style written over the styled group
    style: Style,
}

/// One hit of a rule inside a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Byte range to style, if the styled group took part in the match
    pub styled: Option<Range<usize>>,
    /// Byte range of the whole match
    pub whole: Range<usize>,
}

impl Rule {
    /// Compile a rule using the category's default style
    pub fn new(
        language: &str,
        name: &str,
        pattern: &str,
        group: usize,
        token_type: TokenType,
    ) -> Result<Self> {
        Self::with_style(language, name, pattern, group, token_type, token_type.default_style())
    }

    /// Compile a rule with an explicit style
    pub fn with_style(
        language: &str,
        name: &str,
        pattern: &str,
        group: usize,
        token_type: TokenType,
        style: Style,
    ) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| HighlightError::Construction {
            language: language.to_string(),
            rule: name.to_string(),
            source,
        })?;

        // captures_len counts the implicit group 0
        if group >= regex.captures_len() {
            return Err(HighlightError::InvalidGroup {
                language: language.to_string(),
                rule: name.to_string(),
                group,
            });
        }

        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            group,
            token_type,
            style,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source text of the pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn group(&self) -> usize {
        self.group
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Find the next match in text at or after byte position `start`
    ///
    /// Searching from an offset keeps word boundaries correct, since the
    /// regex still sees the text before `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<RuleMatch> {
        if start > text.len() {
            return None;
        }

        if self.group == 0 {
            return self.pattern.find_at(text, start).map(|m| RuleMatch {
                styled: Some(m.range()),
                whole: m.range(),
            });
        }

        let caps = self.pattern.captures_at(text, start)?;
        let whole = caps.get(0)?.range();
        Some(RuleMatch {
            styled: caps.get(self.group).map(|m| m.range()),
            whole,
        })
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.pattern.as_str() == other.pattern.as_str()
            && self.group == other.group
            && self.token_type == other.token_type
            && self.style == other.style
    }
}

impl Eq for Rule {}

/// Ordered rules for one language
///
/// There is no way to mutate a table once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Freeze an ordered list of rules into a table
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
