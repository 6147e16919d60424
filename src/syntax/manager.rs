//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that maps language identifiers
//! to built profiles, tracks the active language, and caches the spans of
//! the blocks it has highlighted.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::builtin;
use super::engine::{self, SpanResult};
use super::language::{Language, LanguageProfile, LanguageSpec};
use crate::error::{HighlightError, Result};

/// Per-document block cache
///
/// Slot `i` holds the spans of block `i` under the active language, or
/// `None` when the block has not been highlighted yet.
#[derive(Debug, Default)]
pub(crate) struct HighlightCache {
    /// Language the cached spans were computed with
    language: Option<Language>,
    /// Cached spans per block
    block_spans: Vec<Option<SpanResult>>,
}

impl HighlightCache {
    /// Create a new empty cache
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Invalidate a single block
    pub(crate) fn invalidate(&mut self, block: usize) {
        if let Some(slot) = self.block_spans.get_mut(block) {
            *slot = None;
        }
    }

    /// Invalidate entire cache
    pub(crate) fn invalidate_all(&mut self) {
        self.block_spans.clear();
    }

    /// Ensure cache vector is large enough
    pub(crate) fn ensure_size(&mut self, block_count: usize) {
        if self.block_spans.len() < block_count {
            self.block_spans.resize(block_count, None);
        }
    }

    fn store(&mut self, block: usize, spans: SpanResult) {
        self.ensure_size(block + 1);
        self.block_spans[block] = Some(spans);
    }
}

/// Main syntax highlighting manager
pub struct SyntaxManager {
    /// Built language profiles
    profiles: HashMap<Language, Arc<LanguageProfile>>,
    /// Extension to language mapping
    extension_map: HashMap<String, Language>,
    /// Profile used by the block cache
    active: Option<Arc<LanguageProfile>>,
    /// Spans of the blocks highlighted under the active profile
    cache: HighlightCache,
    /// Whether cached highlighting is enabled
    pub enabled: bool,
}

impl SyntaxManager {
    /// Create a manager with every built-in language
    ///
    /// A built-in that fails to build is logged and left out; the others
    /// are still registered.
    pub fn new() -> Self {
        let mut manager = Self::empty();

        for spec in builtin::all_specs() {
            if let Err(e) = manager.register(&spec) {
                tracing::warn!(language = %spec.language, error = %e, "language disabled");
            }
        }

        manager
    }

    /// Create a manager with no languages registered
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
            extension_map: HashMap::new(),
            active: None,
            cache: HighlightCache::new(),
            enabled: true,
        }
    }

    /// Build and register a language
    ///
    /// On error nothing changes. Replacing the active language's profile
    /// drops every cached span computed with the old one.
    pub fn register(&mut self, spec: &LanguageSpec) -> Result<()> {
        let profile = Arc::new(LanguageProfile::build(spec)?);

        for ext in profile.extensions() {
            self.extension_map.insert(ext.to_lowercase(), spec.language);
        }

        if self.cache.language == Some(spec.language) {
            self.active = Some(Arc::clone(&profile));
            self.cache.invalidate_all();
        }

        self.profiles.insert(spec.language, profile);
        Ok(())
    }

    /// Map an extra file extension to a language
    pub fn add_extension(&mut self, ext: &str, language: Language) {
        self.extension_map.insert(ext.trim_start_matches('.').to_lowercase(), language);
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<Language> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).copied()
    }

    /// Get a built profile
    pub fn profile(&self, language: Language) -> Result<Arc<LanguageProfile>> {
        self.profiles
            .get(&language)
            .cloned()
            .ok_or_else(|| HighlightError::UnsupportedLanguage(language.name().to_string()))
    }

    /// Highlight one block under a language
    pub fn highlight(&self, language: Language, text: &str) -> Result<SpanResult> {
        let profile = self.profile(language)?;
        Ok(engine::apply(profile.table(), text))
    }

    /// Highlight one block, resolving the language from its name
    pub fn highlight_named(&self, name: &str, text: &str) -> Result<SpanResult> {
        self.highlight(name.parse()?, text)
    }

    /// Currently active language, if any
    pub fn active_language(&self) -> Option<Language> {
        self.cache.language
    }

    /// Switch the active language and re-highlight every block
    ///
    /// All spans of the previous language are discarded. If the language
    /// is not registered, the previous state is left untouched.
    pub fn set_language<S: AsRef<str>>(
        &mut self,
        language: Language,
        blocks: &[S],
    ) -> Result<Vec<SpanResult>> {
        let profile = self.profile(language)?;

        if let Some(previous) = self.cache.language {
            tracing::debug!(from = %previous, to = %language, blocks = blocks.len(), "switching language");
        }

        self.cache.invalidate_all();
        self.cache.language = Some(language);
        self.active = Some(profile);

        let results: Vec<SpanResult> = blocks
            .iter()
            .map(|block| self.compute(block.as_ref()))
            .collect();

        for (i, spans) in results.iter().enumerate() {
            self.cache.store(i, spans.clone());
        }

        Ok(results)
    }

    /// Re-highlight one block after its text changed
    ///
    /// The new result replaces whatever was cached for the block. Fails
    /// with `NoActiveLanguage` until `set_language` has succeeded.
    pub fn update_block(&mut self, block: usize, text: &str) -> Result<SpanResult> {
        if self.active.is_none() {
            return Err(HighlightError::NoActiveLanguage);
        }
        let spans = self.compute(text);
        self.cache.store(block, spans.clone());
        Ok(spans)
    }

    /// Cached spans of a block
    pub fn cached(&self, block: usize) -> Option<&SpanResult> {
        self.cache.block_spans.get(block).and_then(|s| s.as_ref())
    }

    /// Forget a block that was removed from the document
    pub fn remove_block(&mut self, block: usize) {
        if block < self.cache.block_spans.len() {
            self.cache.block_spans.remove(block);
        }
    }

    /// Drop cached blocks past the end of the document
    pub fn truncate(&mut self, block_count: usize) {
        self.cache.block_spans.truncate(block_count);
    }

    /// Invalidate the cached spans of one block
    pub fn invalidate(&mut self, block: usize) {
        self.cache.invalidate(block);
    }

    fn compute(&self, text: &str) -> SpanResult {
        match &self.active {
            Some(profile) if self.enabled => engine::apply(profile.table(), text),
            _ => SpanResult::default(),
        }
    }

    /// List registered languages
    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<_> = self.profiles.keys().copied().collect();
        langs.sort();
        langs
    }

    /// Toggle cached highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.cache.invalidate_all();
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}
