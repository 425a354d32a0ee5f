//! Resolution of [`MatchCasing`] to a concrete case rule.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkspec_core::MatchCasing;

/// Native case sensitivity of the host platform's usual filesystem.
///
/// Windows and Apple filesystems are case-insensitive by default; everything
/// else is treated as case-sensitive.
pub const PLATFORM_CASE_SENSITIVE: bool = !cfg!(any(windows, target_vendor = "apple"));

/// Whether matching should ignore case, using the platform default for
/// [`MatchCasing::PlatformDefault`].
pub fn resolve_ignore_case(casing: MatchCasing) -> bool {
    resolve_ignore_case_with(casing, PLATFORM_CASE_SENSITIVE)
}

/// Whether matching should ignore case, given the known sensitivity of the
/// filesystem being enumerated (see [`probe_case_sensitivity`]).
pub fn resolve_ignore_case_with(casing: MatchCasing, filesystem_case_sensitive: bool) -> bool {
    match casing {
        MatchCasing::PlatformDefault => !filesystem_case_sensitive,
        MatchCasing::CaseSensitive => false,
        MatchCasing::CaseInsensitive => true,
    }
}

/// Detect whether the filesystem holding `dir`'s entries distinguishes
/// case.
///
/// Looks up one of `dir`'s entries under its case-flipped spelling. Finding
/// the same file means the filesystem folds case. Returns `Ok(None)` when
/// no entry (other than a symlink) has ASCII letters in its name.
pub fn probe_case_sensitivity(dir: &Path) -> io::Result<Option<bool>> {
    let dir = dir.canonicalize()?;

    let Some(candidate) = probe_candidate(&dir)? else {
        tracing::debug!(dir = %dir.display(), "no entry available for case probe");
        return Ok(None);
    };
    let Some(flipped) = flip_file_name(&candidate) else {
        return Ok(None);
    };

    let sensitive = match fs::symlink_metadata(&flipped) {
        Ok(_) => !same_file(&candidate, &flipped)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => true,
        Err(err) => return Err(err),
    };

    tracing::debug!(dir = %dir.display(), sensitive, "probed filesystem case sensitivity");
    Ok(Some(sensitive))
}

fn probe_candidate(dir: &Path) -> io::Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_symlink() {
            continue;
        }
        if has_ascii_letter(&entry.file_name()) {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}

fn has_ascii_letter(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|n| n.chars().any(|c| c.is_ascii_alphabetic()))
}

fn flip_file_name(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let flipped: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    Some(path.with_file_name(flipped))
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    let (a, b) = (fs::symlink_metadata(a)?, fs::symlink_metadata(b)?);
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

/// Candidates are never symlinks, so canonical paths identify the file.
/// They carry the stored spelling, so two names for one file agree.
#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(a.canonicalize()? == b.canonicalize()?)
}
