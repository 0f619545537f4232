// ─── Build Config ───
// JSON description of one build: version, versions file target, resources.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::codegen::GenerationRequest;
use crate::core::error::{BuildError, BuildResult};
use crate::core::resources::ResourceSet;

pub const DEFAULT_CONFIG_FILE: &str = "pe-build.json";

/// Property every resource set receives unless it sets its own.
const VERSION_PROPERTY: &str = "version";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    /// Project version, e.g. `2.5.1+a1b2c3d-SNAPSHOT`.
    pub version: String,
    #[serde(default)]
    pub versions_file: Option<VersionsFileConfig>,
    #[serde(default)]
    pub resources: Vec<ResourceSet>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VersionsFileConfig {
    pub package_name: String,
    pub output_dir: PathBuf,
}

impl BuildConfig {
    /// Read a config file. Relative paths inside it are resolved against
    /// the file's own directory.
    pub fn load(path: &Path) -> BuildResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(BuildError::io(path))?;
        let config: BuildConfig = serde_json::from_str(&raw)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        debug!("Loaded build config {:?}", path);
        Ok(config.resolve_relative_to(base))
    }

    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        if let Some(versions) = &mut self.versions_file {
            versions.output_dir = base.join(&versions.output_dir);
        }
        for set in &mut self.resources {
            set.source_dir = base.join(&set.source_dir);
            set.output_dir = base.join(&set.output_dir);
        }
        self
    }

    pub fn generation_request(&self) -> Option<GenerationRequest> {
        self.versions_file.as_ref().map(|v| {
            GenerationRequest::new(&v.package_name, &self.version, &v.output_dir)
        })
    }

    /// Resource sets with the build version injected as `version`.
    pub fn resource_sets(&self) -> Vec<ResourceSet> {
        self.resources
            .iter()
            .cloned()
            .map(|mut set| {
                set.properties
                    .entry(VERSION_PROPERTY.to_string())
                    .or_insert_with(|| self.version.clone());
                set
            })
            .collect()
    }
}
