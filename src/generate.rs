// src/generate.rs

//! Lockfile to build file pipeline
//!
//! Projects are resolved one at a time, in lockfile order. A project whose
//! repository root cannot be found is logged and skipped; every other project
//! produces a block, possibly a commit-pinned one.

use crate::error::{Error, Result};
use crate::lockfile::{DependencyRecord, Lock};
use crate::naming::bazel_name;
use crate::render::BuildFile;
use crate::repository::{Fetcher, RepoRootResolver, Resolver};
use tracing::{info, warn};
use url::Url;

/// A project left out of the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedProject {
    pub import_path: String,
    pub reason: String,
}

/// Per-run counts, reported after generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Blocks backed by an archive URL
    pub tarballs: usize,
    /// Blocks pinned to a commit
    pub commits: usize,
    pub skipped: Vec<SkippedProject>,
}

impl GenerateSummary {
    pub fn resolved(&self) -> usize {
        self.tarballs + self.commits
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Output of one generation run
#[derive(Debug, Clone)]
pub struct Generated {
    pub build_file: BuildFile,
    pub summary: GenerateSummary,
}

/// Resolve every project of `lock` and render the build file
pub fn generate<F, R>(lock: &Lock, roots: &R, resolver: &Resolver<F>) -> Generated
where
    F: Fetcher,
    R: RepoRootResolver + ?Sized,
{
    let mut build_file = BuildFile::new();
    let mut summary = GenerateSummary::default();

    for project in &lock.projects {
        let record = project.record();

        let source_url = match source_url(&record, roots) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping {} ({}): {}", record.import_path, project.describe_pin(), e);
                summary.skipped.push(SkippedProject {
                    import_path: record.import_path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let resolution = resolver.resolve(&source_url, &record.revision);
        if resolution.descriptor.is_tarball() {
            summary.tarballs += 1;
        } else {
            summary.commits += 1;
        }
        info!(
            "Resolved {} from {} ({:?})",
            record.import_path, source_url, resolution.from
        );

        let name = bazel_name(&record.import_path);
        build_file.push(resolution.descriptor.render(&name, &record.import_path));
    }

    Generated {
        build_file,
        summary,
    }
}

/// Repository URL to probe for a record
///
/// A declared `source` that is already a URL is used without its trailing `/`
/// or `.git`; otherwise it is an import path and goes through root discovery
/// like the project name.
pub fn source_url<R>(record: &DependencyRecord, roots: &R) -> Result<String>
where
    R: RepoRootResolver + ?Sized,
{
    match record.source.as_deref().map(str::trim) {
        Some(source) if is_url(source) => Ok(clean_declared_url(source).to_string()),
        Some(source) => roots
            .repo_root(source)
            .map(|root| root.repo)
            .map_err(|e| match e {
                Error::VcsRootError { reason, .. } => Error::vcs_root(
                    &record.import_path,
                    format!("declared source {source}: {reason}"),
                ),
                other => other,
            }),
        None => roots.repo_root(&record.import_path).map(|root| root.repo),
    }
}

/// `https://github.com/fork/repo.git/` becomes `https://github.com/fork/repo`
fn clean_declared_url(source: &str) -> &str {
    let trimmed = source.trim_end_matches('/');
    trimmed.strip_suffix(".git").unwrap_or(trimmed)
}

fn is_url(source: &str) -> bool {
    Url::parse(source).is_ok_and(|url| url.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing::{FakeFetcher, github_archive};
    use crate::repository::{Prober, RepoRoot};

    struct StaticRoots;

    impl RepoRootResolver for StaticRoots {
        fn repo_root(&self, import_path: &str) -> Result<RepoRoot> {
            match import_path {
                "github.com/pkg/errors" | "github.com/someone/errors" => Ok(RepoRoot {
                    root: import_path.to_string(),
                    repo: format!("https://{import_path}"),
                }),
                "example.org/lib" => Ok(RepoRoot {
                    root: import_path.to_string(),
                    repo: "https://git.example.org/lib".into(),
                }),
                _ => Err(Error::vcs_root(import_path, "unknown host")),
            }
        }
    }

    const LOCK: &str = r#"
[[projects]]
  name = "github.com/pkg/errors"
  revision = "abc123"

[[projects]]
  name = "unknown.example/missing"
  revision = "111"

[[projects]]
  name = "example.org/lib"
  revision = "def456"
"#;

    fn resolver() -> Resolver<FakeFetcher> {
        let fetcher = FakeFetcher::new().with_body(
            "https://github.com/pkg/errors/archive/abc123.tar.gz",
            github_archive("errors-abc123"),
        );
        Resolver::new(Prober::new(fetcher))
    }

    #[test]
    fn test_generate_mixed_lock() {
        let lock = Lock::parse(LOCK).unwrap();
        let generated = generate(&lock, &StaticRoots, &resolver());

        assert_eq!(generated.summary.tarballs, 1);
        assert_eq!(generated.summary.commits, 1);
        assert_eq!(generated.summary.resolved(), 2);
        assert_eq!(
            generated.summary.skipped,
            vec![SkippedProject {
                import_path: "unknown.example/missing".into(),
                reason: "Cannot find repository root for unknown.example/missing: unknown host"
                    .into(),
            }]
        );

        let text = generated.build_file.render();
        let errors = text.find("name = \"com_github_pkg_errors\"").unwrap();
        let lib = text.find("name = \"org_example_lib\"").unwrap();
        assert!(errors < lib);
        assert!(text.contains("strip_prefix = \"errors-abc123/\""));
        assert!(text.contains("commit = \"def456\""));
        assert!(!text.contains("unknown_example_missing"));
    }

    #[test]
    fn test_source_url_from_import_path() {
        let record = DependencyRecord {
            import_path: "github.com/pkg/errors".into(),
            revision: "abc".into(),
            source: None,
        };
        assert_eq!(
            source_url(&record, &StaticRoots).unwrap(),
            "https://github.com/pkg/errors"
        );
    }

    #[test]
    fn test_source_url_declared_url() {
        let record = DependencyRecord {
            import_path: "unknown.example/missing".into(),
            revision: "abc".into(),
            source: Some("https://github.com/fork/missing/".into()),
        };
        assert_eq!(
            source_url(&record, &StaticRoots).unwrap(),
            "https://github.com/fork/missing"
        );
    }

    #[test]
    fn test_source_url_declared_git_suffix() {
        let record = DependencyRecord {
            import_path: "github.com/pkg/errors".into(),
            revision: "abc".into(),
            source: Some("https://github.com/fork/repo.git".into()),
        };
        assert_eq!(
            source_url(&record, &StaticRoots).unwrap(),
            "https://github.com/fork/repo"
        );
        assert_eq!(
            clean_declared_url("https://github.com/fork/repo.git/"),
            "https://github.com/fork/repo"
        );
        assert_eq!(
            clean_declared_url("https://example.org/.github"),
            "https://example.org/.github"
        );
    }

    #[test]
    fn test_source_url_declared_import_path() {
        let record = DependencyRecord {
            import_path: "github.com/pkg/errors".into(),
            revision: "abc".into(),
            source: Some("github.com/someone/errors".into()),
        };
        assert_eq!(
            source_url(&record, &StaticRoots).unwrap(),
            "https://github.com/someone/errors"
        );
    }

    #[test]
    fn test_source_url_declared_unresolvable() {
        let record = DependencyRecord {
            import_path: "github.com/pkg/errors".into(),
            revision: "abc".into(),
            source: Some("nowhere.example/fork".into()),
        };
        let err = source_url(&record, &StaticRoots).unwrap_err();
        assert!(matches!(
            err,
            Error::VcsRootError { import_path, reason }
                if import_path == "github.com/pkg/errors" && reason.contains("nowhere.example/fork")
        ));
    }

    #[test]
    fn test_empty_lock_generates_pass() {
        let generated = generate(&Lock::default(), &StaticRoots, &resolver());
        assert!(generated.build_file.is_empty());
        assert!(generated.build_file.render().ends_with("def go_deps():\n    pass\n"));
    }
}
