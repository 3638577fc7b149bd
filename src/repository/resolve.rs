// src/repository/resolve.rs

//! Choosing how Bazel should fetch a dependency
//!
//! The resolver prefers checksummed archives and degrades step by step:
//!
//! 1. probe the remapped URL (e.g. gopkg.in rewritten to GitHub)
//! 2. probe the original URL
//! 3. fall back to a commit-pinned checkout, which cannot fail
//!
//! Probe failures are logged and absorbed; nothing is retried.

use tracing::{debug, info, warn};

use crate::error::Error;

use super::client::Fetcher;
use super::descriptor::{RepositoryDescriptor, VcsRepo};
use super::probe::Prober;
use super::remap::remap_url;

/// Which step of the fallback chain produced the descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    Remapped,
    Original,
    VcsFallback,
}

/// Descriptor plus provenance, for logging and summaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub descriptor: RepositoryDescriptor,
    pub from: ResolvedFrom,
}

/// Runs the remap / probe / fallback chain for one dependency at a time
pub struct Resolver<F> {
    prober: Prober<F>,
    remap: bool,
}

impl<F: Fetcher> Resolver<F> {
    pub fn new(prober: Prober<F>) -> Self {
        Self {
            prober,
            remap: true,
        }
    }

    /// Skip the remapping step, probing only the original URL
    pub fn with_remap(mut self, remap: bool) -> Self {
        self.remap = remap;
        self
    }

    pub fn prober(&self) -> &Prober<F> {
        &self.prober
    }

    /// Resolve `source_url` at `revision`; always yields a descriptor
    pub fn resolve(&self, source_url: &str, revision: &str) -> Resolution {
        let remapped = if self.remap {
            remap_url(source_url)
        } else {
            source_url.to_string()
        };

        match self.prober.probe(&remapped, revision) {
            Ok(tarball) => {
                let from = if remapped == source_url {
                    ResolvedFrom::Original
                } else {
                    info!("Using {} for {}", remapped, source_url);
                    ResolvedFrom::Remapped
                };
                return Resolution {
                    descriptor: tarball.into(),
                    from,
                };
            }
            Err(e) => log_failed_attempt(&remapped, &e),
        }

        if remapped != source_url {
            match self.prober.probe(source_url, revision) {
                Ok(tarball) => {
                    return Resolution {
                        descriptor: tarball.into(),
                        from: ResolvedFrom::Original,
                    };
                }
                Err(e) => log_failed_attempt(source_url, &e),
            }
        }

        info!(
            "No tarball for {}@{}, falling back to commit checkout",
            source_url, revision
        );
        Resolution {
            descriptor: RepositoryDescriptor::Vcs(VcsRepo {
                revision: revision.to_string(),
            }),
            from: ResolvedFrom::VcsFallback,
        }
    }
}

/// Expected failures stay at debug level; anything else is worth a warning
fn log_failed_attempt(url: &str, e: &Error) {
    if e.is_recoverable() {
        debug!("Tarball probe of {} failed: {}", url, e);
    } else {
        warn!("Tarball probe of {} failed unexpectedly: {}", url, e);
    }
}
