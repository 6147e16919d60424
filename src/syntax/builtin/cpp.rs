//! C++ language definition

use crate::syntax::language::{Language, LanguageSpec};

/// Create C++ language spec
pub fn cpp_spec() -> LanguageSpec {
    LanguageSpec::new(Language::Cpp)
        .extensions(&["cpp", "hpp", "cc", "cxx", "hh", "h"])
        .keywords(&[
            "asm", "auto", "bool", "break", "case", "catch", "char", "class", "const",
            "continue", "default", "delete", "do", "double", "else", "enum", "explicit",
            "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int",
            "long", "mutable", "namespace", "new", "operator", "private", "protected", "public",
            "register", "return", "short", "signed", "sizeof", "static", "struct", "switch",
            "template", "this", "throw", "true", "try", "typedef", "typeid", "typename", "union",
            "unsigned", "using", "virtual", "void", "volatile", "while",
        ])
        .class_introducer("class")
        .call_sites()
        .comment_marker("//")
        .string_forms(&[r#"".*?""#])
}
