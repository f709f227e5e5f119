//! In-memory descriptor catalogs and their JSON storage.
//!
//! A catalog is an ordered list of [`DescriptorEntry`] values. `add` never
//! sorts or deduplicates; `save` writes the entries sorted by descriptor to a
//! sibling temp file, renames it over the target, and adopts that order only
//! once the rename has succeeded. `load` replaces the
//! whole list, or nothing at all when the file is missing or malformed.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CatalogError, Result};
use crate::types::DescriptorEntry;

/// Classification given to imported words whose classification column is empty.
pub const UNKNOWN_CLASSIFICATION: &str = "Unknown Classification";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorCatalog {
    entries: Vec<DescriptorEntry>,
}

impl DescriptorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DescriptorEntry>) -> Self {
        Self { entries }
    }

    pub fn add(&mut self, entry: DescriptorEntry) {
        self.entries.push(entry);
    }

    /// Replace the first entry with the same descriptor, or append when
    /// there is none. Returns the entry that was replaced.
    pub fn replace(&mut self, entry: DescriptorEntry) -> Option<DescriptorEntry> {
        match self
            .entries
            .iter_mut()
            .find(|e| e.descriptor == entry.descriptor)
        {
            Some(slot) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, descriptor: &str) -> Option<&DescriptorEntry> {
        self.entries.iter().find(|e| e.descriptor == descriptor)
    }

    pub fn entries(&self) -> &[DescriptorEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DescriptorEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<DescriptorEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries tagged with `tag`, in current order.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&DescriptorEntry> {
        self.entries.iter().filter(|e| e.has_tag(tag)).collect()
    }

    /// Sort by descriptor and write the catalog as JSON to `path`.
    ///
    /// The sort is stable. An existing file at `path` is only ever replaced
    /// by a complete write, and the in-memory order changes only if the
    /// save succeeds.
    #[tracing::instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.descriptor.cmp(&b.descriptor));

        let mut json = serde_json::to_string_pretty(&sorted)?;
        json.push('\n');

        // Same directory as the target so the rename never crosses filesystems.
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CatalogError::io(path, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| CatalogError::io(path, e))?;
        tmp.persist(path)
            .map_err(|e| CatalogError::io(path, e.error))?;

        self.entries = sorted;
        tracing::info!(path = %path.display(), "catalog saved");
        Ok(())
    }

    /// Replace the catalog with the contents of `path`; returns the new
    /// entry count. On any error the catalog is left as it was.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
            _ => CatalogError::io(path, e),
        })?;

        let entries: Vec<DescriptorEntry> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Deserialize {
                path: path.to_path_buf(),
                source,
            })?;

        self.entries = entries;
        tracing::debug!(entries = self.entries.len(), "catalog loaded");
        Ok(self.entries.len())
    }

    /// Write a human-readable report, one entry per line. Never read back.
    pub fn dump(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
        let mut out = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(out, "{}", entry.dump_line()).map_err(|e| CatalogError::io(path, e))?;
        }
        out.flush().map_err(|e| CatalogError::io(path, e))?;
        Ok(())
    }

    /// Append the words of a colon-delimited word list (see
    /// [`parse_word_list`]). Nothing is added if any line is malformed.
    pub fn import_word_list(&mut self, content: &str) -> Result<usize> {
        let parsed = parse_word_list(content)?;
        let count = parsed.len();
        self.entries.extend(parsed);
        tracing::info!(count, "imported word list");
        Ok(count)
    }
}

impl<'a> IntoIterator for &'a DescriptorCatalog {
    type Item = &'a DescriptorEntry;
    type IntoIter = std::slice::Iter<'a, DescriptorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse a word list of `word : rgb : classification` lines.
///
/// The rgb column is not kept. Classification is comma-separated; an empty
/// one becomes [`UNKNOWN_CLASSIFICATION`]. Blank lines are skipped.
pub fn parse_word_list(content: &str) -> Result<Vec<DescriptorEntry>> {
    let mut entries = Vec::new();

    for (i, raw_line) in content.lines().enumerate() {
        if raw_line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw_line.split(':').collect();
        if fields.len() != 3 {
            tracing::warn!(line = i + 1, found = fields.len(), "malformed word list line");
            return Err(CatalogError::Import {
                line: i + 1,
                found: fields.len(),
            });
        }

        let word = fields[0].trim();
        let classification: Vec<String> = fields[2]
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        let classification = if classification.is_empty() {
            vec![UNKNOWN_CLASSIFICATION.to_string()]
        } else {
            classification
        };

        entries.push(DescriptorEntry::new(word, "").with_classification(classification));
    }

    Ok(entries)
}
