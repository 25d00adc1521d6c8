//! Immutable navigation catalog.
//!
//! The catalog is built once by whoever composes the navigation shell and
//! passed by reference into every filter call. Cloning a catalog shares the
//! underlying entries.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::builtin;
use super::entry::MenuEntry;
use crate::error::{CatalogError, CatalogResult};

/// On-disk catalog layout: either a bare list or `{entries: [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Entries(Vec<MenuEntry>),
    Wrapped { entries: Vec<MenuEntry> },
}

impl CatalogFile {
    fn into_entries(self) -> Vec<MenuEntry> {
        match self {
            CatalogFile::Entries(entries) | CatalogFile::Wrapped { entries } => entries,
        }
    }
}

/// Validated, read-only menu catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    entries: Arc<[MenuEntry]>,
}

impl MenuCatalog {
    /// Build a catalog, validating ids and depth.
    pub fn new(entries: Vec<MenuEntry>) -> CatalogResult<Self> {
        validate(&entries)?;
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The cooperative shell's built-in navigation.
    pub fn koperasi() -> Self {
        Self {
            entries: builtin::koperasi_entries().into(),
        }
    }

    /// Parse a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_yml::from_str(yaml)?;
        Self::new(file.into_entries())
    }

    /// Parse a JSON catalog.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.into_entries())
    }

    /// Load a catalog file, choosing the format by extension.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> CatalogResult<Self> = match extension.as_deref() {
            Some("yml" | "yaml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&content)?;
        debug!(
            path = %path.display(),
            roots = catalog.len(),
            "loaded menu catalog"
        );
        Ok(catalog)
    }

    /// Root entries in declaration order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }

    /// Look up a root entry by id.
    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up a root or child entry by id.
    pub fn find(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find_map(|root| {
            if root.id == id {
                Some(root)
            } else {
                root.children.iter().find(|c| c.id == id)
            }
        })
    }

    /// Number of root entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of root and child entries.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|e| 1 + e.children.len()).sum()
    }

    /// Serialize as YAML (bare list form).
    pub fn to_yaml(&self) -> CatalogResult<String> {
        Ok(serde_yml::to_string(&*self.entries)?)
    }

    /// Serialize as pretty JSON (bare list form).
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&*self.entries)?)
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check id presence, id uniqueness across the tree and the two-level limit.
fn validate(entries: &[MenuEntry]) -> CatalogResult<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for root in entries {
        check_id(root, &mut seen)?;

        for child in &root.children {
            check_id(child, &mut seen)?;

            if child.has_children() {
                return Err(CatalogError::NestedTooDeep {
                    parent: root.id.clone(),
                    child: child.id.clone(),
                });
            }
        }
    }

    Ok(())
}

fn check_id<'a>(entry: &'a MenuEntry, seen: &mut HashSet<&'a str>) -> CatalogResult<()> {
    if entry.id.trim().is_empty() {
        return Err(CatalogError::EmptyId {
            label: entry.label.clone(),
        });
    }
    if !seen.insert(entry.id.as_str()) {
        return Err(CatalogError::DuplicateId(entry.id.clone()));
    }
    Ok(())
}
