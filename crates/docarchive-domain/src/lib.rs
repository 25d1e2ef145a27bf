//! docarchive Domain Layer
//!
//! Value objects and trait interfaces shared by every other crate in the
//! document-archiving pipeline.
//!
//! ## Key Concepts
//!
//! - **Category**: open-vocabulary token chosen by the generation backend
//! - **ClassificationRecord**: the strict `{category, metadata}` shape every
//!   classification produces, success or failure
//! - **FailureKind**: sentinel categories that mark a record as a failure
//!
//! ## Architecture
//!
//! - Pure value types and validation only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions (generation backend,
//!   OCR, archive storage)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use record::{ClassificationRecord, FailureKind, Metadata};
pub use traits::{ArchiveStore, GenerationBackend, ResponseMode, TextExtractor};
