//! Syntax highlighting
//!
//! Languages are described as data (`LanguageSpec`), compiled once into
//! immutable rule tables (`LanguageProfile`), and applied to one block of
//! text at a time by a single engine. `SyntaxManager` owns the profiles
//! and hands out results.

mod builtin;
mod engine;
mod language;
mod manager;
mod rules;
mod style;
mod tokens;

pub use builtin::{all_specs, spec_for};
pub use engine::{apply, SpanResult};
pub use language::{ExtraRule, Language, LanguageProfile, LanguageSpec};
pub use manager::SyntaxManager;
pub use rules::{Rule, RuleMatch, RuleTable};
pub use style::{Color, Span, Style};
pub use tokens::TokenType;
