// src/repository/inspect.rs

//! Discovering the top-level directory of a downloaded archive
//!
//! Forge archives wrap their content in one directory whose exact name
//! (casing, revision suffix) cannot be predicted from the import path, so it
//! is read from the archive itself.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use tar::Archive;

/// Strategy for finding the directory Bazel should strip after extraction
pub trait TopLevelInspector {
    /// Return the strip prefix for the archive readable from `archive`
    fn top_level_directory(&self, archive: &mut dyn Read) -> Result<String>;
}

/// Reads a `.tar.gz` and returns the name of its second entry
///
/// GitHub archives start with a `pax_global_header` entry carrying the
/// commit id; the wrapping directory follows it. The name is returned
/// verbatim, including any trailing `/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecondEntryInspector;

impl TopLevelInspector for SecondEntryInspector {
    fn top_level_directory(&self, archive: &mut dyn Read) -> Result<String> {
        let mut archive = Archive::new(GzDecoder::new(archive));
        let mut entries = archive
            .entries()
            .map_err(|e| Error::ArchiveFormatError(format!("Failed to read tar stream: {e}")))?;

        // Global header, not descriptive of the layout
        entries
            .next()
            .ok_or_else(|| Error::ArchiveFormatError("Archive is empty".to_string()))?
            .map_err(|e| Error::ArchiveFormatError(format!("Failed to read first entry: {e}")))?;

        let root = entries
            .next()
            .ok_or_else(|| Error::ArchiveFormatError("Archive has no second entry".to_string()))?
            .map_err(|e| {
                Error::ArchiveFormatError(format!("Failed to read second entry: {e}"))
            })?;

        let name = String::from_utf8_lossy(&root.path_bytes()).into_owned();
        Ok(name)
    }
}
