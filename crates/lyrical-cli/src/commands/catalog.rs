use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use lyrical_core::{CatalogKind, DescriptorEntry, WordListManager};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Import a colon-delimited word list (word : rgb : classification)
    Import {
        /// Word list to read
        source: PathBuf,

        /// Catalog to import into
        #[arg(long)]
        kind: String,
    },

    /// Write a human-readable report of a catalog
    Dump {
        /// Catalog to dump
        #[arg(long)]
        kind: String,

        /// Report file
        #[arg(short, long, default_value = "Descriptor_dump.txt")]
        output: PathBuf,
    },

    /// Add an entry, replacing any entry with the same descriptor
    Add {
        /// Catalog to add to
        #[arg(long)]
        kind: String,

        #[arg(long)]
        descriptor: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Comma-separated classification
        #[arg(long, value_delimiter = ',')]
        classification: Vec<String>,

        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
}

fn parse_kind(kind: &str) -> Result<CatalogKind> {
    kind.parse().map_err(|e: String| anyhow!(e))
}

pub fn run_catalog(manager: &WordListManager, action: CatalogAction) -> Result<String> {
    match action {
        CatalogAction::Import { source, kind } => {
            let kind = parse_kind(&kind)?;
            let content = fs::read_to_string(&source)
                .with_context(|| format!("Failed to read {}", source.display()))?;

            let mut catalog = manager.load_or_default(kind)?;
            let count = catalog.import_word_list(&content)?;

            fs::create_dir_all(manager.resources()).with_context(|| {
                format!("Failed to create {}", manager.resources().display())
            })?;
            manager.save(kind, &mut catalog)?;

            Ok(format!(
                "Processed {count} words into {} ({} entries).",
                manager.catalog_path(kind).display(),
                catalog.len()
            ))
        }
        CatalogAction::Dump { kind, output } => {
            let kind = parse_kind(&kind)?;
            let catalog = manager.load(kind)?;
            catalog.dump(&output)?;
            Ok(format!(
                "Dumped {} entries to {}.",
                catalog.len(),
                output.display()
            ))
        }
        CatalogAction::Add {
            kind,
            descriptor,
            description,
            classification,
            tags,
        } => {
            let kind = parse_kind(&kind)?;
            let mut catalog = manager.load_or_default(kind)?;
            let entry = DescriptorEntry::new(descriptor.trim(), description)
                .with_classification(classification.iter().map(|c| c.trim()).filter(|c| !c.is_empty()))
                .with_tags(tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()));
            let name = entry.descriptor.clone();
            let verb = if catalog.replace(entry).is_some() {
                "Replaced"
            } else {
                "Added"
            };

            fs::create_dir_all(manager.resources()).with_context(|| {
                format!("Failed to create {}", manager.resources().display())
            })?;
            manager.save(kind, &mut catalog)?;
            Ok(format!("{verb} \"{name}\" in {kind}."))
        }
    }
}
