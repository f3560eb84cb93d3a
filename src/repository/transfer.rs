//! Data Transfer Operations
//!
//! Administrator export/import of the whole dataset as a JSON document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, MenuItem, Suggestion};

use super::menu_store::MenuStore;
use super::storage::Storage;

/// File name of the exported document
pub const EXPORT_FILE_NAME: &str = "campus-eats-data.json";

/// The exported dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub menu_items: Vec<MenuItem>,
    pub suggestions: Vec<Suggestion>,
    pub export_date: DateTime<Utc>,
}

/// An imported dataset; either collection may be absent
///
/// Unknown keys are ignored; an absent key leaves the corresponding
/// persisted collection untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportDocument {
    #[serde(default)]
    menu_items: Option<Vec<MenuItem>>,
    #[serde(default)]
    suggestions: Option<Vec<Suggestion>>,
}

/// Trait for dataset export/import operations
#[async_trait]
pub trait DataTransfer {
    /// Snapshot both collections with an export timestamp
    async fn export_document(&self) -> DomainResult<ExportDocument>;

    /// Write the export document as pretty JSON into `dir`
    ///
    /// Returns the path of the written file.
    async fn write_export(&self, dir: &Path) -> DomainResult<PathBuf>;

    /// Overwrite persisted collections from a JSON document
    ///
    /// Fractional menu-item prices are rounded to whole units. A
    /// document that fails to parse leaves all persisted state exactly
    /// as it was.
    async fn import_json(&self, contents: &str) -> DomainResult<()>;
}

#[async_trait]
impl<S: Storage> DataTransfer for MenuStore<S> {
    async fn export_document(&self) -> DomainResult<ExportDocument> {
        Ok(ExportDocument {
            menu_items: self.menu_items().await?,
            suggestions: self.suggestions().await?,
            export_date: Utc::now(),
        })
    }

    async fn write_export(&self, dir: &Path) -> DomainResult<PathBuf> {
        let document = self.export_document().await?;
        let text = serde_json::to_string_pretty(&document)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let path = dir.join(EXPORT_FILE_NAME);
        std::fs::write(&path, text)
            .map_err(|e| DomainError::Internal(format!("failed to write export file: {}", e)))?;

        log::info!("exported dataset to {}", path.display());
        Ok(path)
    }

    async fn import_json(&self, contents: &str) -> DomainResult<()> {
        // Parse the whole document up front; nothing is written unless
        // the document as a whole is readable.
        let document: ImportDocument = serde_json::from_str(contents)
            .map_err(|e| DomainError::InvalidFormat(format!("unreadable import document: {}", e)))?;

        if let Some(items) = document.menu_items {
            self.save_menu_items(&items).await?;
        }
        if let Some(suggestions) = document.suggestions {
            self.save_suggestions(&suggestions).await?;
        }

        Ok(())
    }
}
