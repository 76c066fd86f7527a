//! Quran content query CLI
//!
//! Loads the bundled JSON datasets from a data directory and answers the
//! same queries the reading screens make: sura listings, verse text,
//! translations, tafsir (with range info), source catalogs, and summary
//! counts.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod key;
mod models;
mod registry;
mod resolver;
mod stats;
mod tafsir;

use key::Address;
use models::DatasetKind;
use registry::QuranRegistry;
use resolver::{ContentResolver, SourceSelector};

#[derive(Parser)]
#[command(name = "quran-core")]
#[command(about = "Query interface over the bundled Quran datasets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Dataset kind for source listings (CLI version, mirrors models::DatasetKind)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliSourceKind {
    /// Verse translations
    Translation,
    /// Commentary (tafsir)
    Tafsir,
}

impl From<CliSourceKind> for DatasetKind {
    fn from(kind: CliSourceKind) -> Self {
        match kind {
            CliSourceKind::Translation => DatasetKind::Translation,
            CliSourceKind::Tafsir => DatasetKind::Tafsir,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List suras, optionally filtered by a search query
    Suras {
        /// Path to the dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Filter by name (any script) or sura number
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the Arabic text of one verse
    Verse {
        /// Path to the dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Canonical verse key, e.g. 2:255
        #[arg(long)]
        key: String,
    },

    /// Show a verse's translation
    Translation {
        /// Path to the dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Canonical verse key, e.g. 1:1
        #[arg(long)]
        key: String,

        /// Translator id, e.g. qaribullah
        #[arg(long)]
        source: String,

        /// Language code; inferred from the source id when omitted
        #[arg(long)]
        language: Option<String>,
    },

    /// Show a verse's tafsir, including range coverage
    Tafsir {
        /// Path to the dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Canonical verse key, e.g. 2:255
        #[arg(long)]
        key: String,

        /// Tafsir source id, e.g. ibn-kathir
        #[arg(long)]
        source: String,

        /// Language code; inferred from the source id when omitted
        #[arg(long)]
        language: Option<String>,
    },

    /// List registered translators or tafsir authors for a language
    Sources {
        /// Path to the dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Which catalog to list
        #[arg(long, value_enum, default_value = "translation")]
        kind: CliSourceKind,

        /// Language code, e.g. en
        #[arg(long)]
        language: String,
    },

    /// Show dataset statistics
    Stats {
        /// Path to the dataset directory
        #[arg(long)]
        data_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suras { data_dir, search } => {
            let registry = QuranRegistry::from_data_dir(&data_dir)?;
            let suras = match search.as_deref() {
                Some(query) => stats::search_suras(&registry, query),
                None => registry.get_all_suras().iter().collect(),
            };

            for sura in suras {
                println!(
                    "{:>3}. {} ({}) — {} verses, {:?}",
                    sura.id,
                    sura.name_simple,
                    sura.name_arabic,
                    sura.verses_count,
                    sura.revelation_place
                );
            }
        }

        Commands::Verse { data_dir, key } => {
            let registry = QuranRegistry::from_data_dir(&data_dir)?;
            let resolver = ContentResolver::new(&registry);

            // Strict parse: a malformed key on the command line is a usage
            // error, not missing content.
            key::parse_key(&key)?;

            match resolver.get_arabic_text(key.as_str()) {
                Some(text) => println!("{}", text),
                None => println!("(not found)"),
            }
        }

        Commands::Translation {
            data_dir,
            key,
            source,
            language,
        } => {
            let registry = QuranRegistry::from_data_dir(&data_dir)?;
            let resolver = ContentResolver::new(&registry);
            key::parse_key(&key)?;

            let selector = selector_for(language, source);
            match resolver.get_translation(Address::Key(key), selector) {
                Some(text) => println!("{}", text),
                None => println!("(not found)"),
            }
        }

        Commands::Tafsir {
            data_dir,
            key,
            source,
            language,
        } => {
            let registry = QuranRegistry::from_data_dir(&data_dir)?;
            key::parse_key(&key)?;

            let selector = selector_for(language, source);
            let result = tafsir::get_tafsir_with_range(&registry, Address::Key(key), selector);

            match result.text {
                Some(text) => {
                    println!("{}", text);
                    if result.has_range {
                        let keys = result.ayah_keys.unwrap_or_default();
                        println!("\nCovers {} verses: {}", keys.len(), keys.join(", "));
                    }
                }
                None => println!("(not found)"),
            }
        }

        Commands::Sources {
            data_dir,
            kind,
            language,
        } => {
            let registry = QuranRegistry::from_data_dir(&data_dir)?;
            let sources = registry.list_sources(kind.into(), &language);

            if sources.is_empty() {
                println!("(no sources registered for {})", language);
            }
            for source in sources {
                println!("{:<16} {}", source.id, source.display_name);
            }
        }

        Commands::Stats { data_dir } => {
            let registry = QuranRegistry::from_data_dir(&data_dir)?;
            let stats = stats::get_statistics(&registry);

            println!("=== Dataset Statistics ===");
            println!("Suras: {}", stats.total_suras);
            println!("Verses: {}", stats.total_verses);
            for count in &stats.translation_counts {
                println!("Translations [{}]: {}", count.language, count.sources);
            }
            for count in &stats.tafsir_counts {
                println!("Tafsir [{}]: {}", count.language, count.sources);
            }
        }
    }

    Ok(())
}

/// Build a source selector from the optional --language flag.
fn selector_for(language: Option<String>, source: String) -> SourceSelector {
    match language {
        Some(lang) => SourceSelector::LangAndId(lang, source),
        None => SourceSelector::Id(source),
    }
}
