//! Dataset registry: owns every loaded dataset and normalizes source-file
//! quirks at load time.
//!
//! Translations and tafsir are keyed by `(language, source_id)`; sura
//! metadata and the flat verse list are loaded once per process. The
//! registry is an explicit constructed instance so tests can load fixture
//! subsets without global state, and it is write-once: all registration
//! happens during initialization, after which every read is a pure map
//! lookup.

use crate::key::{self, KeyError};
use crate::models::{DatasetKind, RawVerse, SourceCatalogEntry, Sura, TextEntry, Verse};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Verse key error: {0}")]
    Key(#[from] KeyError),
    #[error("Invalid dataset {0}: {1}")]
    InvalidDataset(String, String),
}

/// Languages probed first when inferring a namespace from a bare source id.
/// Everything else follows in alphabetical order.
const LANGUAGE_PRIORITY: &[&str] = &["en", "bn"];

/// Display names for the bundled translator and tafsir source ids.
/// Unknown ids fall back to the raw id in catalog listings.
const SOURCE_NAMES: &[(&str, &str)] = &[
    ("qaribullah", "Qaribullah & Darwish"),
    ("shakir", "M. H. Shakir"),
    ("hilali", "Hilali & Khan"),
    ("pickthall", "Mohammed Marmaduke Pickthall"),
    ("muhiuddin", "Muhiuddin Khan"),
    ("taisirul", "Taisirul Quran"),
    ("mujibur", "Sheikh Mujibur Rahman"),
    ("ibn-kathir", "Tafsir Ibn Kathir"),
    ("jalalayn", "Tafsir al-Jalalayn"),
    ("maarif", "Maarif-ul-Quran"),
    ("ahsanul", "Ahsanul Bayan"),
    ("abubakr", "Tafsir Abu Bakr Zakaria"),
];

/// Resolve a source id to its catalog display name.
pub fn source_display_name(source_id: &str) -> String {
    SOURCE_NAMES
        .iter()
        .find(|(id, _)| *id == source_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| source_id.to_string())
}

/// All loaded datasets plus sura/verse metadata.
pub struct QuranRegistry {
    suras: Vec<Sura>,
    verses_by_sura: HashMap<u16, Vec<Verse>>,
    total_verses: usize,
    translations: HashMap<(String, String), HashMap<String, TextEntry>>,
    tafsirs: HashMap<(String, String), HashMap<String, TextEntry>>,
}

impl QuranRegistry {
    pub fn new() -> Self {
        QuranRegistry {
            suras: Vec::new(),
            verses_by_sura: HashMap::new(),
            total_verses: 0,
            translations: HashMap::new(),
            tafsirs: HashMap::new(),
        }
    }

    /// Load every dataset found in a directory of bundled JSON files.
    ///
    /// Expects `suras.json`, `verses.json`, and any number of
    /// `translation_<lang>_<id>.json` / `tafsir_<lang>_<id>.json` files.
    pub fn from_data_dir(dir: &Path) -> Result<Self, RegistryError> {
        let mut registry = QuranRegistry::new();

        let suras: Vec<Sura> = serde_json::from_str(&fs::read_to_string(dir.join("suras.json"))?)?;
        registry.add_suras(suras);

        let verses: Vec<RawVerse> =
            serde_json::from_str(&fs::read_to_string(dir.join("verses.json"))?)?;
        registry.add_verses(verses)?;

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let (kind, rest) = if let Some(rest) = stem.strip_prefix("translation_") {
                (DatasetKind::Translation, rest)
            } else if let Some(rest) = stem.strip_prefix("tafsir_") {
                (DatasetKind::Tafsir, rest)
            } else {
                continue;
            };

            // Source ids may themselves contain underscores; only the first
            // segment is the language code.
            let Some((language, source_id)) = rest.split_once('_') else {
                return Err(RegistryError::InvalidDataset(
                    stem.to_string(),
                    "expected <kind>_<language>_<source>.json".to_string(),
                ));
            };

            let raw: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
            match kind {
                DatasetKind::Translation => {
                    registry.register_translation_json(language, source_id, &raw)?;
                }
                DatasetKind::Tafsir => {
                    registry.register_tafsir_json(language, source_id, &raw)?;
                }
            }
        }

        Ok(registry)
    }

    /// Install the sura metadata table, sorted by id.
    pub fn add_suras(&mut self, mut suras: Vec<Sura>) {
        suras.sort_by_key(|s| s.id);
        self.suras = suras;
    }

    /// Install the flat verse list, grouped per sura and sorted by ayah.
    ///
    /// Records missing a preformatted `verse_key` get one composed from
    /// their `(surah_number, ayah_number)` fields; a record whose fields
    /// cannot form a valid key is a dataset defect and fails the load.
    pub fn add_verses(&mut self, raw: Vec<RawVerse>) -> Result<(), RegistryError> {
        self.total_verses = raw.len();
        let mut grouped: HashMap<u16, Vec<Verse>> = HashMap::new();

        for rv in raw {
            let verse_key = match rv.verse_key {
                Some(k) => k,
                None => key::make_key(rv.surah_number, rv.ayah_number)?,
            };
            grouped.entry(rv.surah_number).or_default().push(Verse {
                id: rv.id,
                ayah_number: rv.ayah_number,
                verse_key,
                words_count: rv.words_count,
                text: rv.text,
            });
        }

        for verses in grouped.values_mut() {
            verses.sort_by_key(|v| v.ayah_number);
        }
        self.verses_by_sura = grouped;
        Ok(())
    }

    /// Register an already-normalized translation dataset. Idempotent: a
    /// second registration for the same `(language, source_id)` replaces the
    /// first.
    pub fn register_translation(
        &mut self,
        language: &str,
        source_id: &str,
        entries: HashMap<String, TextEntry>,
    ) {
        self.translations
            .insert((language.to_string(), source_id.to_string()), entries);
    }

    /// Register an already-normalized tafsir dataset. Same idempotence as
    /// [`register_translation`](Self::register_translation).
    pub fn register_tafsir(
        &mut self,
        language: &str,
        source_id: &str,
        entries: HashMap<String, TextEntry>,
    ) {
        self.tafsirs
            .insert((language.to_string(), source_id.to_string()), entries);
    }

    /// Normalize and register a raw translation file (a JSON object mapping
    /// verse key to either a string or a `{t|text}` record). Returns the
    /// number of entries kept.
    pub fn register_translation_json(
        &mut self,
        language: &str,
        source_id: &str,
        raw: &Value,
    ) -> Result<usize, RegistryError> {
        let entries = normalize_dataset(source_id, raw)?;
        let count = entries.len();
        self.register_translation(language, source_id, entries);
        Ok(count)
    }

    /// Normalize and register a raw tafsir file. Tafsir values may
    /// additionally carry an `ayah_keys` range list; see
    /// [`normalize_entry`].
    pub fn register_tafsir_json(
        &mut self,
        language: &str,
        source_id: &str,
        raw: &Value,
    ) -> Result<usize, RegistryError> {
        let entries = normalize_dataset(source_id, raw)?;
        let count = entries.len();
        self.register_tafsir(language, source_id, entries);
        Ok(count)
    }

    pub fn get_all_suras(&self) -> &[Sura] {
        &self.suras
    }

    pub fn get_sura_by_id(&self, id: u16) -> Option<&Sura> {
        self.suras.iter().find(|s| s.id == id)
    }

    /// Verses of one sura in ayah order; empty for an unknown sura id.
    pub fn get_verses_for_sura(&self, sura_id: u16) -> &[Verse] {
        self.verses_by_sura
            .get(&sura_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a single verse by canonical key.
    pub fn get_verse(&self, verse_key: &str) -> Option<&Verse> {
        let (sura_id, ayah) = key::parse_key(verse_key).ok()?;
        self.get_verses_for_sura(sura_id)
            .iter()
            .find(|v| v.ayah_number == ayah)
    }

    pub fn total_verses(&self) -> usize {
        self.total_verses
    }

    /// The dataset registered for `(kind, language, source_id)`, if any.
    pub fn dataset(
        &self,
        kind: DatasetKind,
        language: &str,
        source_id: &str,
    ) -> Option<&HashMap<String, TextEntry>> {
        self.map_for(kind)
            .get(&(language.to_string(), source_id.to_string()))
    }

    /// All `(language, source_id)` namespaces registered for a kind.
    pub fn namespaces(&self, kind: DatasetKind) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .map_for(kind)
            .keys()
            .map(|(lang, id)| (lang.as_str(), id.as_str()))
            .collect();
        pairs.sort();
        pairs
    }

    /// Registered languages for a kind, in the fixed probe order used for
    /// bare source-id inference: English, then Bengali, then everything
    /// else alphabetically.
    pub fn languages(&self, kind: DatasetKind) -> Vec<&str> {
        let mut langs: Vec<&str> = self
            .map_for(kind)
            .keys()
            .map(|(lang, _)| lang.as_str())
            .collect();
        langs.sort();
        langs.dedup();
        langs.sort_by_key(|lang| {
            LANGUAGE_PRIORITY
                .iter()
                .position(|p| p == lang)
                .unwrap_or(LANGUAGE_PRIORITY.len())
        });
        langs
    }

    /// Catalog of sources registered for a language. Unknown languages
    /// yield an empty list, never an error.
    pub fn list_sources(&self, kind: DatasetKind, language: &str) -> Vec<SourceCatalogEntry> {
        let mut sources: Vec<SourceCatalogEntry> = self
            .map_for(kind)
            .keys()
            .filter(|(lang, _)| lang == language)
            .map(|(lang, id)| SourceCatalogEntry {
                language: lang.clone(),
                id: id.clone(),
                display_name: source_display_name(id),
            })
            .collect();
        sources.sort_by(|a, b| a.id.cmp(&b.id));
        sources
    }

    fn map_for(&self, kind: DatasetKind) -> &HashMap<(String, String), HashMap<String, TextEntry>> {
        match kind {
            DatasetKind::Translation => &self.translations,
            DatasetKind::Tafsir => &self.tafsirs,
        }
    }
}

impl Default for QuranRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize one raw dataset value (JSON object keyed by verse key) into
/// the internal entry map. Entries with no recoverable text are skipped.
fn normalize_dataset(
    source_id: &str,
    raw: &Value,
) -> Result<HashMap<String, TextEntry>, RegistryError> {
    let obj = raw.as_object().ok_or_else(|| {
        RegistryError::InvalidDataset(
            source_id.to_string(),
            "expected a JSON object keyed by verse key".to_string(),
        )
    })?;

    let mut entries = HashMap::with_capacity(obj.len());
    for (verse_key, value) in obj {
        if let Some(entry) = normalize_entry(verse_key, value) {
            entries.insert(verse_key.clone(), entry);
        }
    }
    Ok(entries)
}

/// Map one raw dataset value into the internal record shape.
///
/// Handles the three shapes found in the bundled files:
/// - a bare string (the text itself),
/// - an object storing text under `text` or the short code `t`,
/// - an object additionally carrying an `ayah_keys` range list for
///   commentary covering several verses.
///
/// When a range list is present but omits the entry's own key, the key is
/// appended, so the "own key is a member" contract holds even for sloppy
/// source files.
pub fn normalize_entry(verse_key: &str, value: &Value) -> Option<TextEntry> {
    match value {
        Value::String(text) if !text.is_empty() => Some(TextEntry {
            verse_key: verse_key.to_string(),
            text: text.clone(),
            range_keys: None,
        }),
        Value::Object(map) => {
            // Fixed fallback order: full word first, then the short code.
            let text = ["text", "t"]
                .iter()
                .find_map(|field| map.get(*field).and_then(|v| v.as_str()))
                .filter(|t| !t.is_empty())?;

            let range_keys = map.get("ayah_keys").and_then(|v| v.as_array()).map(|keys| {
                let mut keys: Vec<String> = keys
                    .iter()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect();
                if !keys.iter().any(|k| k == verse_key) {
                    keys.push(verse_key.to_string());
                }
                keys
            });

            Some(TextEntry {
                verse_key: verse_key.to_string(),
                text: text.to_string(),
                range_keys,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RevelationPlace;
    use serde_json::json;

    fn sura(id: u16, name_simple: &str) -> Sura {
        Sura {
            id,
            name: format!("Sura {}", name_simple),
            name_simple: name_simple.to_string(),
            name_arabic: String::new(),
            name_bengali: String::new(),
            verses_count: 7,
            revelation_order: id,
            revelation_place: RevelationPlace::Makkah,
            bismillah_pre: true,
        }
    }

    #[test]
    fn test_normalize_entry_bare_string() {
        let entry = normalize_entry("1:1", &json!("In the Name of Allah")).unwrap();
        assert_eq!(entry.text, "In the Name of Allah");
        assert!(entry.range_keys.is_none());
    }

    #[test]
    fn test_normalize_entry_field_fallback() {
        let full = normalize_entry("1:1", &json!({"text": "full"})).unwrap();
        assert_eq!(full.text, "full");

        let short = normalize_entry("1:1", &json!({"t": "short"})).unwrap();
        assert_eq!(short.text, "short");

        // Full word wins when both are present
        let both = normalize_entry("1:1", &json!({"t": "short", "text": "full"})).unwrap();
        assert_eq!(both.text, "full");
    }

    #[test]
    fn test_normalize_entry_range_list() {
        let entry = normalize_entry(
            "2:255",
            &json!({"text": "commentary", "ayah_keys": ["2:255", "2:256", "2:257"]}),
        )
        .unwrap();
        assert_eq!(
            entry.range_keys.as_deref().unwrap(),
            ["2:255", "2:256", "2:257"]
        );
    }

    #[test]
    fn test_normalize_entry_range_list_missing_own_key() {
        let entry = normalize_entry(
            "2:256",
            &json!({"text": "commentary", "ayah_keys": ["2:255", "2:257"]}),
        )
        .unwrap();
        let keys = entry.range_keys.unwrap();
        assert!(keys.iter().any(|k| k == "2:256"));
    }

    #[test]
    fn test_normalize_entry_unusable_values() {
        assert!(normalize_entry("1:1", &json!("")).is_none());
        assert!(normalize_entry("1:1", &json!(null)).is_none());
        assert!(normalize_entry("1:1", &json!(42)).is_none());
        assert!(normalize_entry("1:1", &json!({"other": "x"})).is_none());
    }

    #[test]
    fn test_register_is_idempotent_upsert() {
        let mut registry = QuranRegistry::new();
        registry
            .register_translation_json("en", "qaribullah", &json!({"1:1": "first"}))
            .unwrap();
        registry
            .register_translation_json("en", "qaribullah", &json!({"1:1": "second"}))
            .unwrap();

        let dataset = registry
            .dataset(DatasetKind::Translation, "en", "qaribullah")
            .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("1:1").unwrap().text, "second");
    }

    #[test]
    fn test_list_sources_unknown_language_is_empty() {
        let registry = QuranRegistry::new();
        assert!(registry
            .list_sources(DatasetKind::Translation, "fr")
            .is_empty());
    }

    #[test]
    fn test_list_sources_display_names() {
        let mut registry = QuranRegistry::new();
        registry
            .register_translation_json("en", "qaribullah", &json!({"1:1": "text"}))
            .unwrap();
        registry
            .register_translation_json("en", "unknown-source", &json!({"1:1": "text"}))
            .unwrap();

        let sources = registry.list_sources(DatasetKind::Translation, "en");
        assert_eq!(sources.len(), 2);
        let by_id = |id: &str| sources.iter().find(|s| s.id == id).unwrap();
        assert_eq!(by_id("qaribullah").display_name, "Qaribullah & Darwish");
        assert_eq!(by_id("unknown-source").display_name, "unknown-source");
    }

    #[test]
    fn test_language_probe_order() {
        let mut registry = QuranRegistry::new();
        for lang in ["ur", "bn", "en", "ar"] {
            registry
                .register_translation_json(lang, "some-source", &json!({"1:1": "x"}))
                .unwrap();
        }
        assert_eq!(
            registry.languages(DatasetKind::Translation),
            ["en", "bn", "ar", "ur"]
        );
    }

    #[test]
    fn test_add_verses_composes_missing_keys() {
        let mut registry = QuranRegistry::new();
        registry.add_suras(vec![sura(1, "Al-Fatihah")]);
        registry
            .add_verses(vec![
                RawVerse {
                    id: 2,
                    surah_number: 1,
                    ayah_number: 2,
                    verse_key: None,
                    words_count: 4,
                    text: "verse two".to_string(),
                },
                RawVerse {
                    id: 1,
                    surah_number: 1,
                    ayah_number: 1,
                    verse_key: Some("1:1".to_string()),
                    words_count: 4,
                    text: "verse one".to_string(),
                },
            ])
            .unwrap();

        let verses = registry.get_verses_for_sura(1);
        assert_eq!(verses.len(), 2);
        // Sorted by ayah regardless of input order
        assert_eq!(verses[0].verse_key, "1:1");
        assert_eq!(verses[1].verse_key, "1:2");
    }

    #[test]
    fn test_add_verses_rejects_unformable_key() {
        let mut registry = QuranRegistry::new();
        let result = registry.add_verses(vec![RawVerse {
            id: 1,
            surah_number: 0,
            ayah_number: 1,
            verse_key: None,
            words_count: 1,
            text: "x".to_string(),
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_verse_by_key() {
        let mut registry = QuranRegistry::new();
        registry
            .add_verses(vec![RawVerse {
                id: 1,
                surah_number: 1,
                ayah_number: 1,
                verse_key: None,
                words_count: 4,
                text: "arabic text".to_string(),
            }])
            .unwrap();

        assert_eq!(registry.get_verse("1:1").unwrap().text, "arabic text");
        assert!(registry.get_verse("1:2").is_none());
        assert!(registry.get_verse("not-a-key").is_none());
    }
}
