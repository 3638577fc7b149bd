// src/error.rs

//! Error types shared across the resolution pipeline

use thiserror::Error;

/// Result type for dep2bazel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a lockfile into repository rules
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP failure (includes timeouts and non-2xx responses)
    #[error("Download failed: {0}")]
    DownloadError(String),

    /// Archive could not be decompressed or has too few entries
    #[error("Invalid archive: {0}")]
    ArchiveFormatError(String),

    /// No archive strategy exists for this host
    #[error("No archive strategy for {0}")]
    UnsupportedHost(String),

    /// Import path could not be mapped to a repository root
    #[error("Cannot find repository root for {import_path}: {reason}")]
    VcsRootError { import_path: String, reason: String },

    /// Missing argument, unreadable or malformed lockfile
    #[error("Invalid input: {0}")]
    InputError(String),

    /// Local filesystem failure
    #[error("I/O error: {0}")]
    IoError(String),

    /// HTTP client could not be constructed
    #[error("Initialization failed: {0}")]
    InitError(String),
}

impl Error {
    /// Shorthand for a [`Error::VcsRootError`]
    pub fn vcs_root(import_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::VcsRootError {
            import_path: import_path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the resolver fallback chain absorbs this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DownloadError(_)
                | Self::ArchiveFormatError(_)
                | Self::UnsupportedHost(_)
                | Self::IoError(_)
        )
    }
}
