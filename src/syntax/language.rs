//! Language definitions for syntax highlighting
//!
//! A `LanguageSpec` describes a language as plain data: its keywords,
//! comment marker, string forms and so on. `LanguageProfile::build` turns
//! a spec into the ordered `RuleTable` the engine runs. Adding a language
//! means adding a spec; nothing else changes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::rules::{Rule, RuleTable};
use super::style::Style;
use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    Cpp,
    Java,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 3] = [Language::Python, Language::Cpp, Language::Java];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::Java => "Java",
        }
    }

    /// Resolve a language from a display name or common alias
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "python" | "py" => Some(Language::Python),
            "c++" | "cpp" | "cxx" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_name(s).ok_or_else(|| HighlightError::UnsupportedLanguage(s.to_string()))
    }
}

/// A rule appended after the canonical categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraRule {
    pub name: String,
    pub pattern: String,
    pub group: usize,
    pub token_type: TokenType,
}

/// Data description of one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    pub language: Language,
    /// File extensions (e.g., ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Reserved words, matched on word boundaries only
    pub keywords: Vec<String>,
    /// Word that introduces a class declaration
    pub class_introducer: Option<String>,
    /// Whether identifiers followed by `(` are styled as calls
    pub call_sites: bool,
    /// Single-line comment marker
    pub comment_marker: Option<String>,
    /// String literal forms, as regex alternatives tried left to right
    pub string_forms: Vec<String>,
    /// Additional rules, layered over everything above
    pub extra_rules: Vec<ExtraRule>,
    /// Per-category styles replacing the defaults
    pub styles: BTreeMap<TokenType, Style>,
}

impl LanguageSpec {
    /// Create a new empty spec
    pub fn new(language: Language) -> Self {
        Self {
            language,
            extensions: Vec::new(),
            keywords: Vec::new(),
            class_introducer: None,
            call_sites: false,
            comment_marker: None,
            string_forms: Vec::new(),
            extra_rules: Vec::new(),
            styles: BTreeMap::new(),
        }
    }

    pub fn extensions(mut self, exts: &[&str]) -> Self {
        self.extensions.extend(exts.iter().map(|e| e.to_string()));
        self
    }

    pub fn keywords(mut self, words: &[&str]) -> Self {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
        self
    }

    pub fn class_introducer(mut self, word: &str) -> Self {
        self.class_introducer = Some(word.to_string());
        self
    }

    pub fn call_sites(mut self) -> Self {
        self.call_sites = true;
        self
    }

    pub fn comment_marker(mut self, marker: &str) -> Self {
        self.comment_marker = Some(marker.to_string());
        self
    }

    pub fn string_forms(mut self, forms: &[&str]) -> Self {
        self.string_forms.extend(forms.iter().map(|f| f.to_string()));
        self
    }

    pub fn extra_rule(mut self, name: &str, pattern: &str, group: usize, token_type: TokenType) -> Self {
        self.extra_rules.push(ExtraRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            group,
            token_type,
        });
        self
    }

    /// Override the style of one category
    pub fn style(mut self, token_type: TokenType, style: Style) -> Self {
        self.styles.insert(token_type, style);
        self
    }

    /// Style rules of a category will paint
    pub fn style_for(&self, token_type: TokenType) -> Style {
        self.styles
            .get(&token_type)
            .copied()
            .unwrap_or_else(|| token_type.default_style())
    }
}

/// A built language: its identifier and compiled rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    language: Language,
    extensions: Vec<String>,
    table: RuleTable,
}

impl LanguageProfile {
    /// Compile a spec into a profile
    ///
    /// Rules are laid down as keywords, class declaration, call sites,
    /// comment, strings, then any extra rules.
    pub fn build(spec: &LanguageSpec) -> Result<Self> {
        let lang = spec.language.name();
        let mut rules = Vec::new();

        if !spec.keywords.is_empty() {
            let words: Vec<String> = spec.keywords.iter().map(|w| regex::escape(w)).collect();
            let pattern = format!(r"\b(?:{})\b", words.join("|"));
            rules.push(rule(spec, "keyword", &pattern, 0, TokenType::Keyword)?);
        }

        if let Some(word) = &spec.class_introducer {
            let pattern = format!(r"\b{}\b\s*(\w+)", regex::escape(word));
            rules.push(rule(spec, "class", &pattern, 0, TokenType::Class)?);
        }

        if spec.call_sites {
            rules.push(rule(spec, "call", r"\b([A-Za-z0-9_]+)\(", 1, TokenType::Function)?);
        }

        if let Some(marker) = &spec.comment_marker {
            let pattern = format!(r"{}[^\n]*", regex::escape(marker));
            rules.push(rule(spec, "comment", &pattern, 0, TokenType::Comment)?);
        }

        if !spec.string_forms.is_empty() {
            let pattern = format!("(?:{})", spec.string_forms.join("|"));
            rules.push(rule(spec, "string", &pattern, 0, TokenType::String)?);
        }

        for extra in &spec.extra_rules {
            rules.push(rule(spec, &extra.name, &extra.pattern, extra.group, extra.token_type)?);
        }

        tracing::debug!(language = lang, rules = rules.len(), "built rule table");

        Ok(Self {
            language: spec.language,
            extensions: spec.extensions.clone(),
            table: RuleTable::new(rules),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &'static str {
        self.language.name()
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

/// Compile one rule of a spec with the spec's style for its category
fn rule(spec: &LanguageSpec, name: &str, pattern: &str, group: usize, token_type: TokenType) -> Result<Rule> {
    Rule::with_style(
        spec.language.name(),
        name,
        pattern,
        group,
        token_type,
        spec.style_for(token_type),
    )
}
