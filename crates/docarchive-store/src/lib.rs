//! docarchive Storage Layer
//!
//! Implements the `ArchiveStore` trait as a category-based directory tree.
//!
//! # Layout
//!
//! ```text
//! <base_dir>/
//!   receipt/
//!     2024-01-15_receipt_scan_001.jpg
//!   health_prescription/
//!     health_prescription_scan_002.png
//! ```
//!
//! Category directories are created on demand. Copying the scan into place
//! and persisting its metadata are not done yet: `store_document` logs the
//! intended placement and returns the target path.
//!
//! # Examples
//!
//! ```no_run
//! use docarchive_store::FileOrganizer;
//! use docarchive_domain::{ArchiveStore, Metadata};
//! use std::path::Path;
//!
//! let organizer = FileOrganizer::new("output_documents").unwrap();
//! let target = organizer
//!     .store_document(Path::new("scan.jpg"), "receipt", "receipt_scan.jpg", &Metadata::new())
//!     .unwrap();
//! println!("{}", target.display());
//! ```

#![warn(missing_docs)]

mod naming;

pub use naming::{category_path_for, document_name_for};

use docarchive_domain::{ArchiveStore, Metadata};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Category path or document name would escape the archive
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Directory-tree implementation of `ArchiveStore`
#[derive(Debug, Clone)]
pub struct FileOrganizer {
    base_dir: PathBuf,
}

impl FileOrganizer {
    /// Create an organizer rooted at `base_dir`, creating it if needed
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Root of the archive
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ArchiveStore for FileOrganizer {
    type Error = StoreError;

    fn store_document(
        &self,
        source_path: &Path,
        category_path: &str,
        document_name: &str,
        metadata: &Metadata,
    ) -> Result<PathBuf, Self::Error> {
        validate_relative(category_path, "category path")?;
        validate_file_name(document_name)?;

        let target_folder = self.base_dir.join(category_path);
        fs::create_dir_all(&target_folder)?;

        let target_file_path = target_folder.join(document_name);

        // TODO: copy the scan into place and write metadata alongside it
        info!(
            "Storing {} to {}",
            source_path.display(),
            target_file_path.display()
        );
        debug!(
            "With metadata: {}",
            serde_json::Value::Object(metadata.clone())
        );

        Ok(target_file_path)
    }
}

/// Reject empty, absolute or parent-traversing relative paths
fn validate_relative(path: &str, what: &str) -> Result<(), StoreError> {
    if path.trim().is_empty() {
        return Err(StoreError::InvalidPath(format!("{} is empty", what)));
    }
    let escapes = Path::new(path).components().any(|component| {
        !matches!(component, Component::Normal(_) | Component::CurDir)
    });
    if escapes {
        return Err(StoreError::InvalidPath(format!(
            "{} '{}' must stay inside the archive",
            what, path
        )));
    }
    Ok(())
}

/// Document names must be a single plain path component
fn validate_file_name(name: &str) -> Result<(), StoreError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(StoreError::InvalidPath(format!(
            "document name '{}' must be a plain file name",
            name
        ))),
    }
}
