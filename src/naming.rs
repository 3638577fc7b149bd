// src/naming.rs

//! Bazel rule names derived from Go import paths
//!
//! The host labels are reversed and joined with the remaining path segments,
//! so `github.com/scele/dep2bazel` becomes `com_github_scele_dep2bazel`.

/// Map an import path to its repository rule name
///
/// Pure and total: an empty path yields an empty name.
pub fn bazel_name(import_path: &str) -> String {
    let mut parts = import_path.split('/');
    let host = parts.next().unwrap_or_default();

    let mut segments: Vec<&str> = host.split('.').rev().collect();
    segments.extend(parts);

    segments.join("_").replace(['-', '.'], "_")
}
