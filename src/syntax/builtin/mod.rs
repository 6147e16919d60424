//! Built-in language definitions
//!
//! Each submodule returns the `LanguageSpec` for one language. Nothing
//! here is compiled until a profile is built from it.

mod cpp;
mod java;
mod python;

use super::language::{Language, LanguageSpec};

/// Get all built-in language specs
pub fn all_specs() -> Vec<LanguageSpec> {
    Language::ALL.into_iter().map(spec_for).collect()
}

/// Get the built-in spec for one language
pub fn spec_for(language: Language) -> LanguageSpec {
    match language {
        Language::Python => python::python_spec(),
        Language::Cpp => cpp::cpp_spec(),
        Language::Java => java::java_spec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::engine::{apply, SpanResult};
    use crate::syntax::language::LanguageProfile;
    use crate::syntax::style::{Span, Style};
    use crate::syntax::tokens::TokenType;

    fn highlight(language: Language, text: &str) -> SpanResult {
        let profile = LanguageProfile::build(&spec_for(language)).unwrap();
        apply(profile.table(), text)
    }

    fn style(token_type: TokenType) -> Style {
        token_type.default_style()
    }

    #[test]
    fn test_all_builtins_build() {
        for spec in all_specs() {
            let profile = LanguageProfile::build(&spec).unwrap();
            assert_eq!(profile.table().len(), 5, "{}", profile.name());
        }
    }

    #[test]
    fn test_spec_for_matches_language() {
        for lang in Language::ALL {
            assert_eq!(spec_for(lang).language, lang);
        }
    }

    #[test]
    fn test_python_single_quoted_strings() {
        let result = highlight(Language::Python, "s = '''return''' + 'if' # x");
        assert_eq!(
            result.spans,
            vec![
                Span::new(4, 12, style(TokenType::String)),
                Span::new(19, 4, style(TokenType::String)),
                Span::new(24, 3, style(TokenType::Comment)),
            ]
        );
    }

    #[test]
    fn test_python_double_quoted_strings() {
        let result = highlight(Language::Python, r#"d = """def""" + "in""#);
        assert_eq!(
            result.spans,
            vec![
                Span::new(4, 9, style(TokenType::String)),
                Span::new(16, 4, style(TokenType::String)),
            ]
        );
    }

    #[test]
    fn test_python_keywords_and_calls() {
        let result = highlight(Language::Python, "if not len(xs): yield None");
        assert_eq!(result.style_at(0), Some(style(TokenType::Keyword)));
        assert_eq!(result.style_at(3), Some(style(TokenType::Keyword)));
        assert_eq!(result.style_at(7), Some(style(TokenType::Function)));
        assert_eq!(result.style_at(10), None);
        assert_eq!(result.style_at(16), Some(style(TokenType::Keyword)));
        assert_eq!(result.style_at(22), Some(style(TokenType::Keyword)));
    }

    #[test]
    fn test_cpp_comment_call_and_string() {
        let result = highlight(Language::Cpp, r#"int f(); // return "x""#);
        assert_eq!(
            result.spans,
            vec![
                Span::new(0, 3, style(TokenType::Keyword)),
                Span::new(4, 1, style(TokenType::Function)),
                Span::new(9, 10, style(TokenType::Comment)),
                Span::new(19, 3, style(TokenType::String)),
            ]
        );
    }

    #[test]
    fn test_cpp_has_no_hash_comments_or_char_strings() {
        assert!(highlight(Language::Cpp, "#include <vector>").is_empty());

        let result = highlight(Language::Cpp, "char c = 'c';");
        assert_eq!(result.spans, vec![Span::new(0, 4, style(TokenType::Keyword))]);
    }

    #[test]
    fn test_cpp_class_declaration() {
        let result = highlight(Language::Cpp, "class Widget : public Base {");
        assert_eq!(result.spans[0], Span::new(0, 12, style(TokenType::Class)));
        assert_eq!(result.style_at(15), Some(style(TokenType::Keyword)));
    }

    #[test]
    fn test_java_class_declaration() {
        let result = highlight(Language::Java, "public class Foo {");
        assert_eq!(
            result.spans,
            vec![
                Span::new(0, 6, style(TokenType::Keyword)),
                Span::new(7, 9, style(TokenType::Class)),
            ]
        );
    }

    #[test]
    fn test_java_string_and_comment() {
        let result = highlight(Language::Java, r#"String s = "while";"#);
        assert_eq!(result.spans, vec![Span::new(11, 7, style(TokenType::String))]);

        let result = highlight(Language::Java, "x = y; // while (true)");
        assert_eq!(result.spans, vec![Span::new(7, 15, style(TokenType::Comment))]);
    }

    #[test]
    fn test_keyword_sets_differ() {
        assert!(!highlight(Language::Java, "synchronized").is_empty());
        assert!(highlight(Language::Python, "synchronized").is_empty());
        assert!(!highlight(Language::Cpp, "namespace").is_empty());
        assert!(highlight(Language::Java, "namespace").is_empty());
        assert!(!highlight(Language::Python, "lambda").is_empty());
        assert!(highlight(Language::Cpp, "lambda").is_empty());
    }
}
