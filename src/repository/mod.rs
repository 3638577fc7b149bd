// src/repository/mod.rs

//! Repository resolution for locked Go dependencies
//!
//! This module provides functionality for:
//! - Finding the repository root of an import path (`go get` discovery)
//! - Rewriting source URLs to hosts with reliable archives
//! - Probing archives for their strip prefix and SHA-256
//! - Falling back to commit-pinned checkouts
//! - Rendering `go_repository` rules

mod client;
mod descriptor;
mod inspect;
mod probe;
mod remap;
mod resolve;
mod vcs;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types and functions
pub use client::{Fetcher, HttpClient};
pub use descriptor::{RepositoryDescriptor, TarballRepo, VcsRepo};
pub use inspect::{SecondEntryInspector, TopLevelInspector};
pub use probe::{ArchiveHost, GITHUB_PREFIX, Prober};
pub use remap::{GOOGLESOURCE_PREFIX, GOPKG_IN_PREFIX, remap_url};
pub use resolve::{Resolution, ResolvedFrom, Resolver};
pub use vcs::{GoImportResolver, RepoRoot, RepoRootResolver};
