//! Python language definition

use crate::syntax::language::{Language, LanguageSpec};

/// Create Python language spec
pub fn python_spec() -> LanguageSpec {
    LanguageSpec::new(Language::Python)
        .extensions(&["py", "pyw", "pyi"])
        .keywords(&[
            "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
            "except", "False", "finally", "for", "from", "global", "if", "import", "in", "is",
            "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return", "True", "try",
            "while", "with", "yield",
        ])
        .class_introducer("class")
        .call_sites()
        .comment_marker("#")
        // Triple-quoted forms first so they win over the empty '' and "" pairs
        .string_forms(&[r"'''.*?'''", r#"""".*?""""#, r"'.*?'", r#"".*?""#])
}
