// src/repository/vcs.rs

//! Mapping Go import paths to repository roots
//!
//! Well-known forges are resolved statically from the path shape. Anything
//! else goes through `go get` discovery: `https://<path>?go-get=1` is fetched
//! and its `<meta name="go-import" content="prefix vcs repo">` tags are
//! matched against the import path.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::client::Fetcher;

/// Repository hosting an import path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    /// Import path prefix that corresponds to the repository root
    pub root: String,
    /// Repository URL, e.g. `https://github.com/pkg/errors`
    pub repo: String,
}

/// Resolves the repository root for an import path
pub trait RepoRootResolver {
    fn repo_root(&self, import_path: &str) -> Result<RepoRoot>;
}

/// Hosts whose repository root is always the first three path segments
const STATIC_HOSTS: &[&str] = &["github.com", "bitbucket.org"];

static GO_IMPORT_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?is)<meta\s+[^>]*?name\s*=\s*["']go-import["']"#,
        r#"[^>]*?content\s*=\s*["']([^"']*)["'][^>]*>"#,
    ))
    .unwrap()
});

static GO_IMPORT_META_REVERSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?is)<meta\s+[^>]*?content\s*=\s*["']([^"']*)["']"#,
        r#"[^>]*?name\s*=\s*["']go-import["'][^>]*>"#,
    ))
    .unwrap()
});

/// Static forge rules plus `?go-get=1` discovery
pub struct GoImportResolver<F> {
    fetcher: F,
}

impl<F: Fetcher> GoImportResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    fn discover(&self, import_path: &str) -> Result<RepoRoot> {
        let url = format!("https://{import_path}?go-get=1");
        debug!("Discovering repository root via {}", url);

        let body = self
            .fetcher
            .fetch_bytes(&url)
            .map_err(|e| Error::vcs_root(import_path, e.to_string()))?;
        let html = String::from_utf8_lossy(&body);

        let mut matches: Vec<RepoRoot> = parse_go_import_metas(&html)
            .into_iter()
            .filter(|meta| is_path_prefix(&meta.root, import_path))
            .collect();
        matches.dedup();

        match matches.len() {
            0 => Err(Error::vcs_root(
                import_path,
                format!("no go-import meta tag matching the import path at {url}"),
            )),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::vcs_root(
                import_path,
                format!("multiple go-import meta tags match at {url}"),
            )),
        }
    }
}

impl<F: Fetcher> RepoRootResolver for GoImportResolver<F> {
    fn repo_root(&self, import_path: &str) -> Result<RepoRoot> {
        let import_path = import_path.trim_matches('/');
        if import_path.is_empty() {
            return Err(Error::vcs_root(import_path, "empty import path"));
        }

        if let Some(root) = static_repo_root(import_path)? {
            return Ok(root);
        }
        self.discover(import_path)
    }
}

/// Resolve paths on hosts with a fixed `host/owner/repo` layout
fn static_repo_root(import_path: &str) -> Result<Option<RepoRoot>> {
    let segments: Vec<&str> = import_path.split('/').collect();
    if !STATIC_HOSTS.contains(&segments[0]) {
        return Ok(None);
    }
    if segments.len() < 3 || segments[1].is_empty() || segments[2].is_empty() {
        return Err(Error::vcs_root(
            import_path,
            format!("expected {}/<owner>/<repo>", segments[0]),
        ));
    }

    let root = segments[..3].join("/");
    Ok(Some(RepoRoot {
        repo: format!("https://{root}"),
        root,
    }))
}

/// Parse every well-formed go-import meta tag in a page
fn parse_go_import_metas(html: &str) -> Vec<RepoRoot> {
    GO_IMPORT_META
        .captures_iter(html)
        .chain(GO_IMPORT_META_REVERSED.captures_iter(html))
        .filter_map(|caps| {
            let mut fields = caps.get(1)?.as_str().split_whitespace();
            let root = fields.next()?;
            let _vcs = fields.next()?;
            let repo = fields.next()?;
            if fields.next().is_some() {
                return None;
            }
            Some(RepoRoot {
                root: root.to_string(),
                repo: repo.to_string(),
            })
        })
        .collect()
}

/// `prefix` equals `path` or ends at a `/` boundary within it
fn is_path_prefix(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
