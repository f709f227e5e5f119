use std::path::{Path, PathBuf};

use crate::catalog::DescriptorCatalog;
use crate::error::Result;
use crate::types::{CatalogKind, DescriptorEntry, WordListField};

/// Default resources directory holding the catalog files.
pub const DEFAULT_RESOURCES_DIR: &str = "literary_resources";

/// What a caller wants to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListRequest {
    pub kind: CatalogKind,
    pub tag: Option<String>,
}

impl WordListRequest {
    pub fn new(kind: CatalogKind) -> Self {
        Self { kind, tag: None }
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Loads word-list catalogs from their fixed locations under a resources
/// directory. Nothing is cached: every request reads storage again.
#[derive(Debug, Clone)]
pub struct WordListManager {
    resources: PathBuf,
}

impl WordListManager {
    pub fn new(resources: impl Into<PathBuf>) -> Self {
        Self {
            resources: resources.into(),
        }
    }

    pub fn resources(&self) -> &Path {
        &self.resources
    }

    pub fn catalog_path(&self, kind: CatalogKind) -> PathBuf {
        self.resources.join(kind.file_name())
    }

    pub fn load(&self, kind: CatalogKind) -> Result<DescriptorCatalog> {
        let mut catalog = DescriptorCatalog::new();
        catalog.load(&self.catalog_path(kind))?;
        Ok(catalog)
    }

    /// Like [`load`](Self::load), but a missing file is an empty catalog.
    pub fn load_or_default(&self, kind: CatalogKind) -> Result<DescriptorCatalog> {
        match self.load(kind) {
            Err(e) if e.is_not_found() => Ok(DescriptorCatalog::new()),
            other => other,
        }
    }

    pub fn save(&self, kind: CatalogKind, catalog: &mut DescriptorCatalog) -> Result<()> {
        catalog.save(&self.catalog_path(kind))
    }

    /// Entries of the requested catalog, filtered by tag when one is given.
    #[tracing::instrument(skip(self))]
    pub fn entries(&self, request: &WordListRequest) -> Result<Vec<DescriptorEntry>> {
        let catalog = self.load(request.kind)?;
        let entries = match &request.tag {
            Some(tag) => catalog.filter_by_tag(tag).into_iter().cloned().collect(),
            None => catalog.into_entries(),
        };
        Ok(entries)
    }

    /// One field of each requested entry, in catalog order.
    pub fn words(&self, request: &WordListRequest, field: WordListField) -> Result<Vec<String>> {
        Ok(self
            .entries(request)?
            .iter()
            .map(|e| field.project(e))
            .collect())
    }
}

impl Default for WordListManager {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCES_DIR)
    }
}
