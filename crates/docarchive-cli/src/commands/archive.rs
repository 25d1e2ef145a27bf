//! Archive command implementation.
//!
//! Each file goes through OCR, classification and placement in the archive.
//! A file whose text cannot be extracted is skipped; a failed
//! classification is still filed, under its failure category.

use crate::cli::ArchiveArgs;
use crate::error::Result;
use crate::output::Formatter;
use docarchive_classifier::Classifier;
use docarchive_domain::{ArchiveStore, ClassificationRecord, GenerationBackend, TextExtractor};
use docarchive_store::{category_path_for, document_name_for};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Classified and placed in the archive
    Stored {
        /// Classification result
        record: ClassificationRecord,
        /// Where the document was filed
        target: PathBuf,
    },
    /// No text could be extracted
    Skipped,
}

/// OCR, classify and store a single file.
pub fn archive_file<B, S>(
    path: &Path,
    extractor: &dyn TextExtractor,
    classifier: &Classifier<B>,
    store: &S,
) -> Result<FileOutcome>
where
    B: GenerationBackend,
    B::Error: Display,
    S: ArchiveStore,
    crate::error::CliError: From<S::Error>,
{
    info!("Processing file: {}", path.display());

    let Some(text) = extractor.extract_text(path) else {
        warn!("Could not extract text from {}. Skipping.", path.display());
        return Ok(FileOutcome::Skipped);
    };

    let record = classifier.classify(&text);
    let target = store.store_document(
        path,
        &category_path_for(&record.category),
        &document_name_for(path, &record),
        &record.metadata,
    )?;

    Ok(FileOutcome::Stored { record, target })
}

/// Execute the archive command.
pub fn execute_archive<B, S>(
    args: ArchiveArgs,
    extractor: &dyn TextExtractor,
    classifier: &Classifier<B>,
    store: &S,
    formatter: &Formatter,
) -> Result<()>
where
    B: GenerationBackend,
    B::Error: Display,
    S: ArchiveStore,
    crate::error::CliError: From<S::Error>,
{
    let mut stored = 0usize;
    let mut skipped = 0usize;

    for path in &args.files {
        match archive_file(path, extractor, classifier, store)? {
            FileOutcome::Stored { record, target } => {
                println!("{}", formatter.document_stored(path, &record, &target));
                stored += 1;
            }
            FileOutcome::Skipped => {
                println!(
                    "{}",
                    formatter.error(&format!("{}: no text extracted, skipped", path.display()))
                );
                skipped += 1;
            }
        }
    }

    println!(
        "{}",
        formatter.info(&format!("{} stored, {} skipped", stored, skipped))
    );
    Ok(())
}
