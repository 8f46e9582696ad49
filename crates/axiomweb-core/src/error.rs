//! Error types for AxiomWeb

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for AxiomWeb operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// The configured input directory does not exist
    #[error("Input directory not found: {0}")]
    InputDirMissing(PathBuf),

    /// General I/O error during the site build
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
