//! lexhl - rule-driven, multi-language line syntax highlighting
//!
//! Each supported language is an ordered table of regex rules. A block of
//! text (normally one line) is highlighted by running every rule over it
//! in order, later rules overriding earlier ones where they overlap.
//!
//! ```
//! use lexhl::{Language, SyntaxManager};
//!
//! let manager = SyntaxManager::new();
//! let spans = manager.highlight(Language::Python, "return 1  # done").unwrap();
//! assert_eq!(spans.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{HighlightError, Result};
pub use syntax::{Color, Language, LanguageProfile, LanguageSpec, Span, SpanResult, Style, SyntaxManager, TokenType};
