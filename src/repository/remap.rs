// src/repository/remap.rs

//! Rewriting source URLs to hosts with reliable tarball downloads
//!
//! - gopkg.in only redirects to GitHub and serves no archives itself, so its
//!   URLs are mapped to the GitHub repository behind them.
//! - go.googlesource.com archives are not byte-for-byte reproducible, so the
//!   `golang` GitHub mirror is tried first.

use regex::Regex;
use std::sync::LazyLock;

pub const GOPKG_IN_PREFIX: &str = "https://gopkg.in/";
pub const GOOGLESOURCE_PREFIX: &str = "https://go.googlesource.com/";

/// `/user/name.v1/sub` and `/name.v2`
static GOPKG_IN_NEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^/(?:([a-zA-Z0-9][-a-zA-Z0-9]+)/)?",
        r"([a-zA-Z][-.a-zA-Z0-9]*)",
        r"\.((?:v0|v[1-9][0-9]*)(?:\.0|\.[1-9][0-9]*){0,2}(?:-unstable)?)",
        r"(?:\.git)?((?:/[a-zA-Z0-9][-.a-zA-Z0-9]*)*)$",
    ))
    .unwrap()
});

/// `/user/v1/name/sub` and `/v2/name`
static GOPKG_IN_LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^/(?:([a-z0-9][-a-z0-9]+)/)?",
        r"((?:v0|v[1-9][0-9]*)(?:\.0|\.[1-9][0-9]*){0,2}(?:-unstable)?)",
        r"/([a-zA-Z][-a-zA-Z0-9]*)",
        r"(?:\.git)?((?:/[a-zA-Z][-a-zA-Z0-9]*)*)$",
    ))
    .unwrap()
});

/// Map a source URL to the URL that should be probed first
///
/// Returns the input unchanged when no rule applies.
pub fn remap_url(url: &str) -> String {
    if url.starts_with(GOPKG_IN_PREFIX) {
        // Keep the leading slash, both patterns anchor on it
        let tail = &url[GOPKG_IN_PREFIX.len() - 1..];
        match gopkg_in_target(tail) {
            Some((user, name)) => github_for_gopkg_in(user, name),
            None => url.to_string(),
        }
    } else if let Some(path) = url.strip_prefix(GOOGLESOURCE_PREFIX) {
        let repo_name = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);
        format!("https://github.com/golang/{repo_name}")
    } else {
        url.to_string()
    }
}

/// Extract `(user, name)` from a gopkg.in path tail
fn gopkg_in_target(tail: &str) -> Option<(Option<&str>, &str)> {
    if let Some(caps) = GOPKG_IN_NEW.captures(tail) {
        let user = caps.get(1).map(|m| m.as_str());
        return Some((user, caps.get(2)?.as_str()));
    }

    // Legacy layout puts the version before the name
    let caps = GOPKG_IN_LEGACY.captures(tail)?;
    let user = caps.get(1).map(|m| m.as_str());
    Some((user, caps.get(3)?.as_str()))
}

/// gopkg.in maps an unqualified `name` to `github.com/go-name/name`
fn github_for_gopkg_in(user: Option<&str>, name: &str) -> String {
    match user {
        Some(user) => format!("https://github.com/{user}/{name}"),
        None => format!("https://github.com/go-{name}/{name}"),
    }
}
