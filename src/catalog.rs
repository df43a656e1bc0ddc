use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::CatalogError;
use crate::wizard::items::{CollectionKind, ItemCollection, SelectableItem};

/// A single catalog entry (subject or question type)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The subject and question-type sets offered by the wizard
///
/// A default catalog ships embedded in the binary. On first run it is
/// seeded into the user config directory where it can be edited; later
/// runs load the edited copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub subjects: Vec<CatalogEntry>,
    pub question_types: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load the embedded default catalog
    pub fn builtin() -> Self {
        const EMBEDDED_CATALOG: &str = include_str!("../config/catalog.json");
        serde_json::from_str(EMBEDDED_CATALOG)
            .unwrap_or_else(|e| panic!("embedded catalog is malformed: {e}"))
    }

    /// Load the catalog from the user config directory.
    ///
    /// Seeds the embedded default on first run, so users have a file to
    /// edit. Falls back to the embedded catalog when no config directory
    /// is available.
    pub fn load() -> Result<Self, CatalogError> {
        let Some(path) = Self::catalog_path() else {
            tracing::warn!("No config directory available, using embedded catalog");
            return Ok(Self::builtin());
        };

        if !path.exists() {
            tracing::debug!("Catalog not found, seeding embedded default");
            let catalog = Self::builtin();
            catalog.save()?;
            return Ok(catalog);
        }

        let content = fs::read_to_string(&path).map_err(|e| CatalogError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| CatalogError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        tracing::debug!("Loaded catalog from: {}", path.display());
        Ok(catalog)
    }

    /// Save the catalog to the user config directory
    pub fn save(&self) -> Result<(), CatalogError> {
        let Some(path) = Self::catalog_path() else {
            return Err(CatalogError::SaveFailed {
                path: "<unknown>".to_string(),
                source: "Could not determine user config directory".into(),
            });
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CatalogError::SaveFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| CatalogError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(&path, json).map_err(|e| CatalogError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        tracing::debug!("Saved catalog to: {}", path.display());
        Ok(())
    }

    /// Get the catalog file path in the user config directory
    pub fn catalog_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("SmartBankEDU").join("catalog.json"))
    }

    /// Get the catalog path for display purposes
    pub fn catalog_path_display() -> String {
        Self::catalog_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Build the wizard's item collections, validating id uniqueness
    pub fn into_collections(self) -> Result<(ItemCollection, ItemCollection), CatalogError> {
        let subjects = ItemCollection::new(
            CollectionKind::Subjects,
            self.subjects.into_iter().map(entry_to_item).collect(),
        )?;
        let question_types = ItemCollection::new(
            CollectionKind::QuestionTypes,
            self.question_types.into_iter().map(entry_to_item).collect(),
        )?;
        Ok((subjects, question_types))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry_to_item(entry: CatalogEntry) -> SelectableItem {
    SelectableItem::new(entry.id, entry.name, entry.description)
}
