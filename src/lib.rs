// src/lib.rs

//! dep2bazel
//!
//! Turns a dep `Gopkg.lock` into Bazel `go_repository` rules, preferring
//! content-addressed tarballs over version-control checkouts.
//!
//! # Architecture
//!
//! - Naming: import path to rule name (`github.com/a/b` -> `com_github_a_b`)
//! - Repository roots: static forge rules and `?go-get=1` discovery
//! - Remapping: gopkg.in and go.googlesource.com to GitHub
//! - Probing: archive download, strip-prefix discovery, SHA-256
//! - Resolution: remapped probe, original probe, commit fallback
//! - Rendering: `go_repository` blocks inside `def go_deps():`

pub mod config;
mod error;
pub mod generate;
pub mod hash;
pub mod lockfile;
pub mod naming;
pub mod render;
pub mod repository;

pub use config::ResolverConfig;
pub use error::{Error, Result};
pub use generate::{GenerateSummary, Generated, SkippedProject, generate};
pub use lockfile::{DependencyRecord, Lock, LockedProject};
pub use naming::bazel_name;
pub use render::BuildFile;
pub use repository::{
    GoImportResolver, HttpClient, Prober, RepositoryDescriptor, Resolver, remap_url,
};
