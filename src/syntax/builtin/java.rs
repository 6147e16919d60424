//! Java language definition

use crate::syntax::language::{Language, LanguageSpec};

/// Create Java language spec
pub fn java_spec() -> LanguageSpec {
    LanguageSpec::new(Language::Java)
        .extensions(&["java"])
        .keywords(&[
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
            "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
            "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
            "interface", "long", "native", "new", "package", "private", "protected", "public",
            "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
            "throw", "throws", "transient", "try", "void", "volatile", "while",
        ])
        .class_introducer("class")
        .call_sites()
        .comment_marker("//")
        .string_forms(&[r#"".*?""#])
}
