//! Builds the registry from a directory of per-owner source files.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::normalize::normalize;
use crate::registry::Entry;
use crate::registry::OwnerStats;
use crate::registry::Registry;

/// Result of a successful load: the ordered registry plus per-owner counts
/// for the one-time summary report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRegistry {
    pub registry: Registry,
    pub stats: OwnerStats,
}

/// Loads every recognized source file under `dir` into a registry.
///
/// A source file is a regular, non-hidden file with a `.txt` extension; its
/// owner label is the filename up to the first `.`. Within a file, blank
/// lines and `#` comments are skipped and the first whitespace-delimited
/// token of each remaining line is normalized into an entry. Files are
/// visited in sorted filename order so the registry's tie-break order does
/// not depend on filesystem enumeration.
///
/// Any unreadable directory or file is fatal: no partial registry is
/// produced.
pub fn load_registry(dir: &Path) -> Result<LoadedRegistry, LoadError> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .into_iter()
        .map(|dir_entry| dir_entry.path())
        .filter(|path| is_source_file(path))
        .collect();
    paths.sort();

    let mut entries = Vec::new();
    let mut stats = OwnerStats::new();
    for path in &paths {
        let Some(owner) = owner_label(path) else {
            continue;
        };
        let contents = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
            path: path.clone(),
            source,
        })?;
        for line in contents.lines() {
            let Some(code) = parse_line(line) else {
                continue;
            };
            entries.push(Entry::new(code, owner.clone()));
            *stats.entry(owner.clone()).or_insert(0) += 1;
        }
    }

    let registry = Registry::from_entries(entries);
    tracing::info!(
        total = registry.len(),
        owners = stats.len(),
        "parcel registry loaded"
    );
    for (owner, count) in &stats {
        tracing::debug!(owner = %owner, entries = count, "registry owner");
    }
    Ok(LoadedRegistry { registry, stats })
}

fn is_source_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

fn owner_label(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let owner = name.split('.').next()?;
    if owner.is_empty() {
        None
    } else {
        Some(owner.to_string())
    }
}

/// Extracts the normalized code from one source line, or `None` for blank
/// lines, comments, and tokens that normalize to nothing.
fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let token = line.split_whitespace().next()?;
    let code = normalize(token);
    if code.is_empty() { None } else { Some(code) }
}
