// src/repository/testing.rs

//! In-memory fakes and archive fixtures for unit tests

use super::client::Fetcher;
use crate::error::{Error, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

/// Serves canned bodies by exact URL and records every request
#[derive(Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for FakeFetcher {
    fn download_to(&self, url: &str, dest: &mut dyn Write) -> Result<u64> {
        self.requests.borrow_mut().push(url.to_string());
        let body = self
            .bodies
            .get(url)
            .ok_or_else(|| Error::DownloadError(format!("HTTP 404 Not Found from {url}")))?;
        dest.write_all(body)
            .map_err(|e| Error::IoError(e.to_string()))?;
        Ok(body.len() as u64)
    }
}

/// Build a gzipped tarball shaped like a GitHub archive: a global header
/// entry, then the top-level directory, then one file inside it
pub fn github_archive(root: &str) -> Vec<u8> {
    let dir = format!("{root}/");
    let file = format!("{root}/README.md");
    archive_with_entries(&["pax_global_header", dir.as_str(), file.as_str()])
}

/// Build a gzipped tarball with the given entry names, in order; names
/// ending in `/` become directories
pub fn archive_with_entries(names: &[&str]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for name in names {
        let mut header = tar::Header::new_gnu();
        // Written verbatim so directory names keep their trailing slash
        header.as_old_mut().name[..name.len()].copy_from_slice(name.as_bytes());

        let content: &[u8] = if name.ends_with('/') { b"" } else { b"fixture\n" };
        if name.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(0o755);
        } else {
            header.set_entry_type(tar::EntryType::Regular);
            header.set_mode(0o644);
        }
        header.set_size(content.len() as u64);
        header.set_cksum();
        builder.append(&header, content).unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}
