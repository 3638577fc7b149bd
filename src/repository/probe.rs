// src/repository/probe.rs

//! Turning a host URL and revision into a tarball descriptor
//!
//! # Host strategies
//!
//! | Host | Archive URL | Downloaded | strip_prefix | sha256 |
//! |------|-------------|------------|--------------|--------|
//! | github.com | `<url>/archive/<rev>.tar.gz` | yes | second entry | SHA-256 of bytes |
//! | go.googlesource.com | `<url>/+archive/<rev>.tar.gz` | no | empty | empty |
//!
//! Gitiles (go.googlesource.com) regenerates its archives on every request
//! and the bytes differ between downloads, so a pinned checksum would break
//! the next fetch. Any other host is rejected without touching the network.

use crate::error::{Error, Result};
use crate::hash::Sha256Writer;
use std::io::{Seek, SeekFrom, Write};
use tracing::{debug, info};

use super::client::Fetcher;
use super::descriptor::TarballRepo;
use super::inspect::{SecondEntryInspector, TopLevelInspector};
use super::remap::GOOGLESOURCE_PREFIX;

pub const GITHUB_PREFIX: &str = "https://github.com/";

/// Archive conventions of the supported forges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveHost {
    /// `/archive/<rev>.tar.gz`, reproducible, wrapped in one directory
    GitHub,
    /// `/+archive/<rev>.tar.gz`, not reproducible, unwrapped
    GoogleSource,
}

impl ArchiveHost {
    /// Built-in host routes, matched by URL prefix
    pub fn for_url(url: &str) -> Option<Self> {
        if url.starts_with(GITHUB_PREFIX) {
            Some(Self::GitHub)
        } else if url.starts_with(GOOGLESOURCE_PREFIX) {
            Some(Self::GoogleSource)
        } else {
            None
        }
    }

    /// Download URL for `revision` of the repository at `url`
    pub fn archive_url(&self, url: &str, revision: &str) -> String {
        let base = url.trim_end_matches('/');
        match self {
            Self::GitHub => format!("{base}/archive/{revision}.tar.gz"),
            Self::GoogleSource => format!("{base}/+archive/{revision}.tar.gz"),
        }
    }
}

/// Probes hosts for checksummed tarballs
pub struct Prober<F> {
    fetcher: F,
    inspector: Box<dyn TopLevelInspector>,
}

impl<F: Fetcher> Prober<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            inspector: Box::new(SecondEntryInspector),
        }
    }

    /// Replace the strip-prefix discovery strategy
    pub fn with_inspector(mut self, inspector: Box<dyn TopLevelInspector>) -> Self {
        self.inspector = inspector;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Build a tarball descriptor for `revision` of the repository at `url`
    pub fn probe(&self, url: &str, revision: &str) -> Result<TarballRepo> {
        let host = ArchiveHost::for_url(url)
            .ok_or_else(|| Error::UnsupportedHost(url.to_string()))?;
        let archive_url = host.archive_url(url, revision);

        match host {
            ArchiveHost::GitHub => self.probe_downloaded(archive_url),
            ArchiveHost::GoogleSource => {
                debug!("Skipping checksum for non-reproducible archive {}", archive_url);
                Ok(TarballRepo {
                    url: archive_url,
                    strip_prefix: String::new(),
                    sha256: String::new(),
                })
            }
        }
    }

    /// Download the archive, hash it and discover its strip prefix
    fn probe_downloaded(&self, archive_url: String) -> Result<TarballRepo> {
        // Unlinked temp file: removed on drop, whichever way this returns
        let file = tempfile::tempfile()
            .map_err(|e| Error::IoError(format!("Failed to create temp file: {e}")))?;

        let mut writer = Sha256Writer::new(file);
        self.fetcher.download_to(&archive_url, &mut writer)?;
        writer
            .flush()
            .map_err(|e| Error::IoError(format!("Failed to flush download: {e}")))?;
        let size = writer.bytes_written();
        let (mut file, sha256) = writer.finish();

        file.seek(SeekFrom::Start(0))
            .map_err(|e| Error::IoError(format!("Failed to rewind download: {e}")))?;
        let strip_prefix = self.inspector.top_level_directory(&mut file)?;

        info!(
            "Probed {} ({} bytes, strip_prefix {:?})",
            archive_url, size, strip_prefix
        );

        Ok(TarballRepo {
            url: archive_url,
            strip_prefix,
            sha256,
        })
    }
}
