// tests/common/mod.rs

//! Shared test utilities: in-memory network and archive fixtures.

#![allow(dead_code)]

use dep2bazel::repository::{Fetcher, RepoRoot, RepoRootResolver};
use dep2bazel::{Error, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

/// Serves canned bodies by URL and records requests.
#[derive(Default)]
pub struct MockNetwork {
    bodies: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for MockNetwork {
    fn download_to(&self, url: &str, dest: &mut dyn Write) -> Result<u64> {
        self.requests.borrow_mut().push(url.to_string());
        match self.bodies.get(url) {
            Some(body) => {
                dest.write_all(body).map_err(|e| Error::IoError(e.to_string()))?;
                Ok(body.len() as u64)
            }
            None => Err(Error::DownloadError(format!("HTTP 404 Not Found from {url}"))),
        }
    }
}

/// Repository roots from a fixed table.
#[derive(Default)]
pub struct RootTable {
    roots: HashMap<String, String>,
}

impl RootTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, import_path: &str, repo: &str) -> Self {
        self.roots.insert(import_path.to_string(), repo.to_string());
        self
    }
}

impl RepoRootResolver for RootTable {
    fn repo_root(&self, import_path: &str) -> Result<RepoRoot> {
        self.roots
            .get(import_path)
            .map(|repo| RepoRoot {
                root: import_path.to_string(),
                repo: repo.clone(),
            })
            .ok_or_else(|| Error::vcs_root(import_path, "unrecognized import path"))
    }
}

/// Gzipped tarball laid out like a GitHub archive download.
pub fn github_tarball(root: &str) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let comment = b"52 comment=645ef00459ed84a119197bfb8d8205042c6df63d\n";
    let mut pax = tar::Header::new_ustar();
    pax.set_path("pax_global_header").unwrap();
    pax.set_entry_type(tar::EntryType::XGlobalHeader);
    pax.set_size(comment.len() as u64);
    pax.set_mode(0o666);
    pax.set_cksum();
    builder.append(&pax, &comment[..]).unwrap();

    let mut dir = tar::Header::new_ustar();
    let dir_name = format!("{root}/");
    dir.as_ustar_mut().unwrap().name[..dir_name.len()].copy_from_slice(dir_name.as_bytes());
    dir.set_entry_type(tar::EntryType::Directory);
    dir.set_mode(0o775);
    dir.set_size(0);
    dir.set_cksum();
    builder.append(&dir, std::io::empty()).unwrap();

    let content = b"package errors\n";
    let mut file = tar::Header::new_ustar();
    file.set_path(format!("{root}/errors.go")).unwrap();
    file.set_entry_type(tar::EntryType::Regular);
    file.set_mode(0o664);
    file.set_size(content.len() as u64);
    file.set_cksum();
    builder.append(&file, &content[..]).unwrap();

    builder.into_inner().unwrap().finish().unwrap()
}
