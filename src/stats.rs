//! Aggregate views over the registry: sura search and summary counts.
//!
//! Pure functions over already-loaded data; no I/O.

use crate::models::{DatasetKind, LanguageCount, Statistics, Sura};
use crate::registry::QuranRegistry;

/// Free-text search over sura names.
///
/// Matches case-insensitive substrings of the default-language name, the
/// simple (transliterated) name, the Arabic name, and the Bengali name, and
/// substrings of the decimal id, so "2" finds sura 2 and "11" finds 11 and
/// 110-114. An empty query returns every sura.
pub fn search_suras<'a>(registry: &'a QuranRegistry, query: &str) -> Vec<&'a Sura> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return registry.get_all_suras().iter().collect();
    }

    registry
        .get_all_suras()
        .iter()
        .filter(|sura| {
            sura.name.to_lowercase().contains(&needle)
                || sura.name_simple.to_lowercase().contains(&needle)
                || sura.name_arabic.contains(&needle)
                || sura.name_bengali.contains(&needle)
                || sura.id.to_string().contains(&needle)
        })
        .collect()
}

/// Summary counts for the stats screen.
pub fn get_statistics(registry: &QuranRegistry) -> Statistics {
    Statistics {
        total_suras: registry.get_all_suras().len(),
        total_verses: registry.total_verses(),
        translation_counts: count_by_language(registry, DatasetKind::Translation),
        tafsir_counts: count_by_language(registry, DatasetKind::Tafsir),
    }
}

fn count_by_language(registry: &QuranRegistry, kind: DatasetKind) -> Vec<LanguageCount> {
    registry
        .languages(kind)
        .into_iter()
        .map(|language| LanguageCount {
            language: language.to_string(),
            sources: registry
                .namespaces(kind)
                .iter()
                .filter(|(lang, _)| *lang == language)
                .count(),
        })
        .collect()
}
