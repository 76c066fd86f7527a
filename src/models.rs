//! Data structures for the Quran content resolution core.

use serde::{Deserialize, Serialize};

/// Where a sura was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    Makkah,
    Madinah,
}

/// Immutable metadata for one of the 114 suras.
///
/// Loaded once at startup from the bundled metadata file, which uses
/// snake_case field names; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sura {
    pub id: u16,
    pub name: String,
    pub name_simple: String,
    pub name_arabic: String,
    pub name_bengali: String,
    pub verses_count: u16,
    pub revelation_order: u16,
    pub revelation_place: RevelationPlace,
    pub bismillah_pre: bool,
}

/// A single verse with its Arabic text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verse {
    /// Global sequence number across the whole text.
    pub id: u32,
    /// 1-based position within the sura.
    pub ayah_number: u16,
    /// Canonical `"{sura}:{ayah}"` address.
    pub verse_key: String,
    pub words_count: u16,
    pub text: String,
}

/// Raw verse record as stored in the flat ayah dataset.
///
/// The file carries a `surah_number` used for grouping and sometimes omits
/// the preformatted key; both quirks are resolved during loading, after
/// which only [`Verse`] circulates.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVerse {
    pub id: u32,
    pub surah_number: u16,
    pub ayah_number: u16,
    #[serde(default)]
    pub verse_key: Option<String>,
    #[serde(default)]
    pub words_count: u16,
    pub text: String,
}

/// Normalized translation or tafsir record.
///
/// Source files store the content under differing field names (`t` vs
/// `text`) and encode multi-verse commentary either by duplicating the text
/// under every covered key or by storing it once with an explicit key list.
/// The load-time adapter maps every shape into this one record so the
/// resolver never branches on file quirks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub verse_key: String,
    pub text: String,
    /// Every verse key covered by this entry, when it explains a range.
    /// `None` for ordinary single-verse entries.
    pub range_keys: Option<Vec<String>>,
}

/// Which family of datasets a source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Translation,
    Tafsir,
}

/// A translator or tafsir author available for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCatalogEntry {
    pub language: String,
    pub id: String,
    pub display_name: String,
}

/// Result of a range-aware tafsir lookup.
///
/// `has_range` is true only when the underlying entry carries an explicit
/// covered-key list; in that case `ayah_keys` holds every covered key, the
/// queried key included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TafsirResult {
    pub text: Option<String>,
    pub ayah_keys: Option<Vec<String>>,
    pub has_range: bool,
}

impl TafsirResult {
    /// The uniform "nothing there" value for soft misses.
    pub fn not_found() -> Self {
        TafsirResult {
            text: None,
            ayah_keys: None,
            has_range: false,
        }
    }
}

/// Per-language dataset counts for one kind of source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub sources: usize,
}

/// Summary counts over everything the registry holds.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_suras: usize,
    pub total_verses: usize,
    pub translation_counts: Vec<LanguageCount>,
    pub tafsir_counts: Vec<LanguageCount>,
}
