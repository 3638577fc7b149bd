// src/repository/descriptor.rs

//! Resolved repository descriptors and their `go_repository` rendering
//!
//! Field order and indentation are what existing generated `deps.bzl` files
//! contain; changing them produces noisy diffs for every consumer.

use std::fmt::Write;

/// Archive-backed repository: a URL Bazel downloads and extracts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarballRepo {
    pub url: String,
    /// Directory to strip after extraction, possibly empty
    pub strip_prefix: String,
    /// Hex SHA-256 of the archive, empty when the host is not reproducible
    pub sha256: String,
}

/// Checkout-backed repository pinned to a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsRepo {
    pub revision: String,
}

/// How Bazel should fetch one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryDescriptor {
    Tarball(TarballRepo),
    Vcs(VcsRepo),
}

impl RepositoryDescriptor {
    /// Render a `go_repository` block, indented for the body of `go_deps()`
    pub fn render(&self, name: &str, import_path: &str) -> String {
        match self {
            Self::Tarball(tarball) => tarball.render(name, import_path),
            Self::Vcs(vcs) => vcs.render(name, import_path),
        }
    }

    pub fn is_tarball(&self) -> bool {
        matches!(self, Self::Tarball(_))
    }
}

impl From<TarballRepo> for RepositoryDescriptor {
    fn from(tarball: TarballRepo) -> Self {
        Self::Tarball(tarball)
    }
}

impl From<VcsRepo> for RepositoryDescriptor {
    fn from(vcs: VcsRepo) -> Self {
        Self::Vcs(vcs)
    }
}

impl TarballRepo {
    pub fn render(&self, name: &str, import_path: &str) -> String {
        let mut out = rule_head(name, import_path);
        // Writing to a String cannot fail
        let _ = writeln!(out, "        urls = [\"{}\"],", self.url);
        let _ = writeln!(out, "        strip_prefix = \"{}\",", self.strip_prefix);
        if !self.sha256.is_empty() {
            let _ = writeln!(out, "        sha256 = \"{}\",", self.sha256);
        }
        rule_tail(&mut out);
        out
    }
}

impl VcsRepo {
    pub fn render(&self, name: &str, import_path: &str) -> String {
        let mut out = rule_head(name, import_path);
        let _ = writeln!(out, "        commit = \"{}\",", self.revision);
        rule_tail(&mut out);
        out
    }
}

fn rule_head(name: &str, import_path: &str) -> String {
    format!(
        concat!(
            "\n    go_repository(\n",
            "        name = \"{name}\",\n",
            "        importpath = \"{import_path}\",\n",
        ),
        name = name,
        import_path = import_path,
    )
}

fn rule_tail(out: &mut String) {
    out.push_str("        build_file_proto_mode = \"disable\",\n");
    out.push_str("    )\n");
}
