//! Content resolution: verse text for a given source.
//!
//! Hides two legacy calling conventions (key string vs (sura, ayah) pair,
//! bare source id vs explicit language+id) behind one lookup path. Absence
//! of content is never an error here: a missing dataset, missing entry, or
//! malformed address all resolve to `None`. Callers that need hard failures
//! on malformed keys use [`crate::key::parse_key`] directly.

use crate::key::Address;
use crate::models::{DatasetKind, TextEntry};
use crate::registry::QuranRegistry;

/// How the caller names a translation or tafsir source.
///
/// A bare id is resolved by probing registered languages in the fixed
/// priority order (see [`QuranRegistry::languages`]); the first language
/// namespace containing the id wins. If two languages ever register the
/// same id for different authors, the higher-priority language is chosen,
/// so bundled ids are expected to be globally unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelector {
    /// Bare source id, language inferred.
    Id(String),
    /// Explicit `(language, source_id)`.
    LangAndId(String, String),
}

impl From<&str> for SourceSelector {
    fn from(id: &str) -> Self {
        SourceSelector::Id(id.to_string())
    }
}

impl From<String> for SourceSelector {
    fn from(id: String) -> Self {
        SourceSelector::Id(id)
    }
}

impl From<(&str, &str)> for SourceSelector {
    fn from((language, id): (&str, &str)) -> Self {
        SourceSelector::LangAndId(language.to_string(), id.to_string())
    }
}

impl From<(String, String)> for SourceSelector {
    fn from((language, id): (String, String)) -> Self {
        SourceSelector::LangAndId(language, id)
    }
}

/// Read-only resolver over a loaded registry.
pub struct ContentResolver<'a> {
    registry: &'a QuranRegistry,
}

impl<'a> ContentResolver<'a> {
    pub fn new(registry: &'a QuranRegistry) -> Self {
        ContentResolver { registry }
    }

    /// Translated text for a verse, or `None` when the source or verse is
    /// not registered.
    pub fn get_translation(
        &self,
        address: impl Into<Address>,
        selector: impl Into<SourceSelector>,
    ) -> Option<String> {
        self.lookup(DatasetKind::Translation, &address.into(), &selector.into())
            .map(|entry| entry.text.clone())
    }

    /// Tafsir commentary text for a verse; range structure is flattened to
    /// plain text here. Use [`crate::tafsir::get_tafsir_with_range`] when
    /// the covered-key list matters.
    pub fn get_tafsir(
        &self,
        address: impl Into<Address>,
        selector: impl Into<SourceSelector>,
    ) -> Option<String> {
        self.lookup(DatasetKind::Tafsir, &address.into(), &selector.into())
            .map(|entry| entry.text.clone())
    }

    /// The normalized tafsir entry itself, for range-aware callers.
    pub fn get_tafsir_entry(
        &self,
        address: impl Into<Address>,
        selector: impl Into<SourceSelector>,
    ) -> Option<&TextEntry> {
        self.lookup(DatasetKind::Tafsir, &address.into(), &selector.into())
    }

    /// Arabic source text of a verse.
    pub fn get_arabic_text(&self, address: impl Into<Address>) -> Option<String> {
        let key = address.into().canonicalize().ok()?;
        self.registry.get_verse(&key).map(|v| v.text.clone())
    }

    fn lookup(
        &self,
        kind: DatasetKind,
        address: &Address,
        selector: &SourceSelector,
    ) -> Option<&TextEntry> {
        let key = address.canonicalize().ok()?;
        let (language, source_id) = self.resolve_selector(kind, selector)?;
        self.registry.dataset(kind, &language, &source_id)?.get(&key)
    }

    /// Resolve a selector to a concrete `(language, source_id)` namespace,
    /// probing for bare ids. `None` when the id exists in no namespace.
    fn resolve_selector(
        &self,
        kind: DatasetKind,
        selector: &SourceSelector,
    ) -> Option<(String, String)> {
        match selector {
            SourceSelector::LangAndId(language, id) => Some((language.clone(), id.clone())),
            SourceSelector::Id(id) => self
                .registry
                .languages(kind)
                .into_iter()
                .find(|lang| self.registry.dataset(kind, lang, id).is_some())
                .map(|lang| (lang.to_string(), id.clone())),
        }
    }
}
