// ─── Resource Processing ───
// Copies a resource tree, expanding build properties in filtered files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::expand::expand;
use crate::core::error::{BuildError, BuildResult};
use crate::core::fs;

/// One source tree to copy into an output directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ResourceSet {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Globs (relative to `source_dir`, `/`-separated) of files to expand.
    #[serde(default)]
    pub filtered: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl ResourceSet {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            filtered: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn filter(mut self, pattern: impl Into<String>) -> Self {
        self.filtered.push(pattern.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceReport {
    /// Files copied byte for byte.
    pub copied: usize,
    /// Files that went through property expansion.
    pub expanded: usize,
}

/// Copy every regular file under `set.source_dir` to the same relative path
/// under `set.output_dir`. Symlinks are followed; a link is copied as the
/// content it points to. Files matching a `filtered` glob are read as
/// UTF-8 and expanded with `set.properties` first.
///
/// A missing source directory is not an error; nothing is copied.
pub fn process_resources(set: &ResourceSet) -> BuildResult<ResourceReport> {
    let matcher = build_matcher(&set.filtered)?;
    let mut report = ResourceReport::default();

    if !set.source_dir.is_dir() {
        warn!("Resource directory {:?} does not exist, skipping", set.source_dir);
        return Ok(report);
    }

    for entry in WalkDir::new(&set.source_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&set.source_dir) else {
            continue;
        };
        let dest = set.output_dir.join(relative);

        if matcher.is_match(relative) {
            expand_file(entry.path(), &dest, &set.properties)?;
            debug!("Expanded {:?}", relative);
            report.expanded += 1;
        } else {
            if let Some(parent) = dest.parent() {
                fs::ensure_dir(parent)?;
            }
            std::fs::copy(entry.path(), &dest).map_err(BuildError::io(&dest))?;
            report.copied += 1;
        }
    }

    info!(
        "Processed resources {:?} -> {:?} ({} copied, {} expanded)",
        set.source_dir, set.output_dir, report.copied, report.expanded
    );
    Ok(report)
}

fn build_matcher(patterns: &[String]) -> BuildResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);
    }
    Ok(builder.build()?)
}

fn expand_file(
    src: &Path,
    dest: &Path,
    properties: &BTreeMap<String, String>,
) -> BuildResult<()> {
    let bytes = std::fs::read(src).map_err(BuildError::io(src))?;
    let text =
        String::from_utf8(bytes).map_err(|_| BuildError::NonUtf8Resource(src.to_path_buf()))?;
    let expanded = expand(&text, properties).map_err(|source| BuildError::Template {
        path: src.to_path_buf(),
        source,
    })?;
    fs::write_atomic(dest, expanded.as_bytes())
}
