// src/commands.rs
//! Command handlers for the dep2bazel CLI

use crate::cli::{Cli, USAGE};
use anyhow::{Context, Result};
use dep2bazel::{
    BuildFile, GoImportResolver, HttpClient, Lock, Prober, Resolver, ResolverConfig, generate,
};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

/// Exit status when `--strict` is set and projects were skipped
const EXIT_SKIPPED: u8 = 2;

/// Generate rules for every project in the lockfile
pub fn cmd_generate(cli: &Cli) -> Result<ExitCode> {
    let lockfile = cli.lockfile.trim();
    if lockfile.is_empty() {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    }

    let lock = Lock::load(Path::new(lockfile))?;
    info!("Loaded {} projects from {}", lock.projects.len(), lockfile);

    let config = ResolverConfig::default()
        .with_timeout_secs(cli.timeout)
        .with_remap(!cli.no_remap);
    let client = HttpClient::new(&config)?;

    let roots = GoImportResolver::new(&client);
    let resolver = Resolver::new(Prober::new(&client)).with_remap(config.remap);

    let generated = generate(&lock, &roots, &resolver);
    let summary = &generated.summary;

    match &cli.output {
        Some(path) => write_file(&generated.build_file, path)?,
        None => generated
            .build_file
            .write_to(io::stdout().lock())
            .context("Failed to write to stdout")?,
    }

    info!(
        "Generated {} rules ({} tarballs, {} commits), skipped {}",
        summary.resolved(),
        summary.tarballs,
        summary.commits,
        summary.skipped.len()
    );

    if cli.strict && summary.has_skipped() {
        for skipped in &summary.skipped {
            warn!("Not resolved: {}", skipped.import_path);
        }
        return Ok(ExitCode::from(EXIT_SKIPPED));
    }

    Ok(ExitCode::SUCCESS)
}

/// Write the build file next to its destination, then rename into place
fn write_file(build_file: &BuildFile, dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    build_file
        .write_to(io::BufWriter::new(temp.as_file_mut()))
        .with_context(|| format!("Failed to write {}", dest.display()))?;
    temp.as_file_mut().flush()?;
    temp.persist(dest)
        .with_context(|| format!("Failed to move generated file to {}", dest.display()))?;

    info!("Wrote {}", dest.display());
    Ok(())
}
