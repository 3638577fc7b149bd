// src/lockfile.rs

//! Gopkg.lock parsing
//!
//! dep writes one `[[projects]]` table per locked dependency:
//!
//! ```toml
//! [[projects]]
//!   name = "github.com/pkg/errors"
//!   packages = ["."]
//!   revision = "645ef00459ed84a119197bfb8d8205042c6df63d"
//!   version = "v0.8.0"
//! ```
//!
//! Only `name`, `revision` and `source` influence resolution. `branch`,
//! `version` and `packages` are kept for diagnostics. Other keys
//! (`digest`, `pruneopts`, `[solve-meta]`) are ignored.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed Gopkg.lock file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lock {
    #[serde(default)]
    pub projects: Vec<LockedProject>,
}

/// One locked project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockedProject {
    pub name: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub revision: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub packages: Vec<String>,
}

/// What the resolver needs to know about one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Host-qualified Go import path, also the Bazel `importpath`
    pub import_path: String,
    /// Opaque VCS revision to pin
    pub revision: String,
    /// Alternate location declared in the lockfile, if any
    pub source: Option<String>,
}

impl Lock {
    /// Read and parse a lockfile from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::InputError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::InputError(msg) => {
                Error::InputError(format!("failed to parse {}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse lockfile content and validate every project entry
    pub fn parse(content: &str) -> Result<Self> {
        let lock: Lock = toml::from_str(content).map_err(|e| Error::InputError(e.to_string()))?;

        for (index, project) in lock.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(Error::InputError(format!(
                    "project #{} has an empty name",
                    index + 1
                )));
            }
            if project.revision.trim().is_empty() {
                return Err(Error::InputError(format!(
                    "project {} has no revision",
                    project.name
                )));
            }
        }

        Ok(lock)
    }

    /// Dependency records in lockfile order
    pub fn records(&self) -> Vec<DependencyRecord> {
        self.projects.iter().map(LockedProject::record).collect()
    }
}

impl LockedProject {
    pub fn record(&self) -> DependencyRecord {
        DependencyRecord {
            import_path: self.name.clone(),
            revision: self.revision.clone(),
            source: self.source.clone().filter(|s| !s.trim().is_empty()),
        }
    }

    /// Human-readable pin, e.g. `v0.8.0@645ef00` or `master@645ef00`
    pub fn describe_pin(&self) -> String {
        let short: String = self.revision.chars().take(7).collect();
        match (&self.version, &self.branch) {
            (Some(version), _) => format!("{version}@{short}"),
            (None, Some(branch)) => format!("{branch}@{short}"),
            (None, None) => short,
        }
    }
}
