//! Command implementations.

pub mod archive;
pub mod classify;
pub mod config;

pub use self::archive::{archive_file, execute_archive, FileOutcome};
pub use self::classify::{execute_classify, read_input};
pub use self::config::execute_config;
