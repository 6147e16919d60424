//! Configuration file support
//!
//! Loads settings from ~/.lexhl.toml (or %USERPROFILE%\.lexhl.toml on Windows)
//!
//! Example:
//! ```toml
//! # lexhl configuration
//! default-language = "Python"
//! line-numbers = true
//!
//! [extensions]
//! pyx = "Python"
//! ino = "C++"
//!
//! [styles]
//! comment = "darkGreen italic"
//! keyword = "bright-blue bold"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;
use crate::syntax::{self, Language, Style, SyntaxManager, TokenType};

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Language used when detection by extension fails
    pub default_language: Option<String>,
    /// Whether to prefix output lines with their number
    pub line_numbers: bool,
    /// Extra extension to language mappings
    pub extensions: BTreeMap<String, String>,
    /// Category name to style description, e.g. `comment = "darkGreen italic"`
    pub styles: BTreeMap<String, String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexhl.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexhl.toml"))
        }
    }

    /// Load configuration from file
    ///
    /// A missing file gives the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The configured fallback language, if it names a supported one
    pub fn default_language(&self) -> Option<Language> {
        let name = self.default_language.as_deref()?;
        let lang = Language::from_name(name);
        if lang.is_none() {
            tracing::warn!(language = name, "ignoring unknown default-language");
        }
        lang
    }

    /// The configured style overrides that name a known category and style
    pub fn style_overrides(&self) -> Vec<(TokenType, Style)> {
        let mut overrides = Vec::new();
        for (category, description) in &self.styles {
            match (TokenType::from_name(category), Style::describe(description)) {
                (Some(token_type), Some(style)) => overrides.push((token_type, style)),
                _ => tracing::warn!(category = %category, style = %description, "ignoring style"),
            }
        }
        overrides
    }

    /// Apply style overrides and extension mappings to a manager
    ///
    /// Styled languages are rebuilt from their built-in specs.
    pub fn apply(&self, manager: &mut SyntaxManager) {
        let overrides = self.style_overrides();
        if !overrides.is_empty() {
            for lang in manager.languages() {
                let spec = overrides
                    .iter()
                    .fold(syntax::spec_for(lang), |spec, &(token_type, style)| spec.style(token_type, style));
                if let Err(e) = manager.register(&spec) {
                    tracing::warn!(language = %lang, error = %e, "keeping default styles");
                }
            }
        }

        for (ext, name) in &self.extensions {
            match Language::from_name(name) {
                Some(lang) => manager.add_extension(ext, lang),
                None => tracing::warn!(extension = %ext, language = %name, "ignoring unknown language"),
            }
        }
    }
}
