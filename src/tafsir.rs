//! Range-aware tafsir resolution.
//!
//! Some tafsir editions explain several contiguous verses with one
//! commentary entry. Depending on the edition, that entry is either
//! duplicated under every covered key or stored once with an explicit key
//! list; the load-time adapter reduces both shapes to a `range_keys` list,
//! and this layer presents the result uniformly so callers never see the
//! difference.

use crate::key::Address;
use crate::models::TafsirResult;
use crate::registry::QuranRegistry;
use crate::resolver::{ContentResolver, SourceSelector};

/// Tafsir lookup that surfaces range coverage.
///
/// `has_range` is true when the entry carries a covered-key list, in which
/// case `ayah_keys` includes the queried verse's own canonical key (the
/// adapter guarantees membership at load time). Soft misses return
/// [`TafsirResult::not_found`], never an error.
pub fn get_tafsir_with_range(
    registry: &QuranRegistry,
    address: impl Into<Address>,
    selector: impl Into<SourceSelector>,
) -> TafsirResult {
    let resolver = ContentResolver::new(registry);
    match resolver.get_tafsir_entry(address, selector) {
        Some(entry) => match &entry.range_keys {
            Some(keys) => TafsirResult {
                text: Some(entry.text.clone()),
                ayah_keys: Some(keys.clone()),
                has_range: true,
            },
            None => TafsirResult {
                text: Some(entry.text.clone()),
                ayah_keys: None,
                has_range: false,
            },
        },
        None => TafsirResult::not_found(),
    }
}
