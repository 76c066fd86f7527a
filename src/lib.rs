//! Quran Content Resolution Core
//!
//! Normalizes heterogeneous bundled datasets (sura metadata, the flat verse
//! list, per-translator translation files, per-author tafsir files) into one
//! consistent query interface. Datasets are registered once at startup into
//! a [`registry::QuranRegistry`]; every lookup afterwards is a pure
//! in-memory read, and absence of content resolves to `None` or an empty
//! collection rather than an error.
//!
//! # Example
//!
//! ```
//! use quran_core::prelude::*;
//! use serde_json::json;
//!
//! let mut registry = QuranRegistry::new();
//! registry
//!     .register_translation_json(
//!         "en",
//!         "qaribullah",
//!         &json!({"1:1": "In the Name of Allah, the Merciful, the Most Merciful"}),
//!     )
//!     .unwrap();
//!
//! let resolver = ContentResolver::new(&registry);
//!
//! // Both historic calling conventions resolve identically
//! let by_pair = resolver.get_translation((1, 1), "qaribullah");
//! let by_key = resolver.get_translation("1:1", ("en", "qaribullah"));
//! assert_eq!(by_pair, by_key);
//! ```

pub mod key;
pub mod models;
pub mod registry;
pub mod resolver;
pub mod stats;
pub mod tafsir;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::key::{make_key, parse_key, Address, KeyError, SURA_COUNT};
    pub use crate::models::{
        DatasetKind, LanguageCount, RawVerse, RevelationPlace, SourceCatalogEntry, Statistics,
        Sura, TafsirResult, TextEntry, Verse,
    };
    pub use crate::registry::{source_display_name, QuranRegistry, RegistryError};
    pub use crate::resolver::{ContentResolver, SourceSelector};
    pub use crate::stats::{get_statistics, search_suras};
    pub use crate::tafsir::get_tafsir_with_range;
}

// Re-export commonly used types at the crate root
pub use key::{Address, KeyError};
pub use models::{DatasetKind, Sura, TafsirResult, TextEntry, Verse};
pub use registry::{QuranRegistry, RegistryError};
pub use resolver::{ContentResolver, SourceSelector};
