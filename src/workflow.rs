//! Bump workflow orchestration logic
//!
//! This module owns the read-bump-propagate transaction, separated from CLI
//! argument parsing so the workflow can be exercised programmatically
//! against temporary document trees without depending on clap.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::{BumpVersionError, Result};
use crate::version::BumpLevel;
use crate::{manifest, marker};

/// Arguments for the bump workflow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Bump magnitude to apply
    pub level: BumpLevel,

    /// Preview mode - compute the bump but write nothing
    pub dry_run: bool,
}

/// Result of a completed bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// Version found in the manifest before bumping
    pub old_version: String,

    /// Version computed from the requested level
    pub new_version: String,

    /// Whether the documents were (or, under dry-run, would be) rewritten
    pub changed: bool,
}

/// Main bump workflow
///
/// Orchestrates the version bump transaction:
/// 1. Read the manifest and parse the current version
/// 2. Compute the bumped version
/// 3. Rewrite and persist the manifest
/// 4. Read, rewrite (or append), and persist the marker
///
/// The level was validated before this point, so no input error can occur
/// after the first write. The manifest is durably written before the marker
/// is read: the authoritative document never lags behind the derived one,
/// though a crash between the two writes leaves the marker one step behind.
///
/// # Arguments
///
/// * `args` - Workflow arguments (level, dry_run)
/// * `config` - Paths of the manifest and marker documents
///
/// # Returns
///
/// Result containing the old/new version strings or error
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: &Config) -> Result<BumpOutcome> {
    let manifest_text = fs::read_to_string(&config.manifest)?;
    let current = manifest::extract_version(&manifest_text)
        .ok_or_else(|| BumpVersionError::missing_version_field(&config.manifest))?;

    let bumped = current.bump(args.level);
    let old_version = current.to_string();
    let new_version = bumped.to_string();

    // Invariant guard: the three levels always move the version, but a true
    // no-op must not touch either file.
    if new_version == old_version {
        return Ok(BumpOutcome {
            old_version,
            new_version,
            changed: false,
        });
    }

    if args.dry_run {
        return Ok(BumpOutcome {
            old_version,
            new_version,
            changed: true,
        });
    }

    persist_document(
        Path::new(&config.manifest),
        &manifest::replace_version(&manifest_text, &bumped),
    )?;

    let marker_text = fs::read_to_string(&config.marker)?;
    persist_document(
        Path::new(&config.marker),
        &marker::replace_or_append(&marker_text, &bumped),
    )?;

    Ok(BumpOutcome {
        old_version,
        new_version,
        changed: true,
    })
}

/// Stage new content beside the target and atomically rename it into place.
///
/// The temp file lives in the target's directory so the rename stays on one
/// filesystem; a crash mid-write can never leave a half-written document.
fn persist_document(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged
        .persist(path)
        .map_err(|e| BumpVersionError::Io(e.error))?;

    Ok(())
}
