//! Error types for lexhl

use thiserror::Error;

/// Result type alias for lexhl operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("{language}: invalid pattern for rule '{rule}': {source}")]
    Construction {
        language: String,
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("{language}: rule '{rule}' styles capture group {group}, which the pattern does not have")]
    InvalidGroup {
        language: String,
        rule: String,
        group: usize,
    },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("No active language")]
    NoActiveLanguage,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}

impl HighlightError {
    /// Whether this error was raised while building a language profile
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            HighlightError::Construction { .. } | HighlightError::InvalidGroup { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = HighlightError::UnsupportedLanguage("Cobol".to_string());
        assert_eq!(err.to_string(), "Unsupported language: Cobol");
        assert!(!err.is_construction());
        assert_eq!(HighlightError::NoActiveLanguage.to_string(), "No active language");
    }

    #[test]
    fn test_construction_message() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = HighlightError::Construction {
            language: "Python".to_string(),
            rule: "keyword".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Python: invalid pattern for rule 'keyword'"));
        assert!(err.is_construction());
    }
}
