use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::codegen::VersionFileGenerator;
use crate::core::config::BuildConfig;
use crate::core::error::BuildResult;
use crate::core::resources::{self, ResourceReport};
use crate::core::version::Version;

/// What one build produced.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub version: String,
    pub versions_file: Option<PathBuf>,
    pub resources: Vec<ResourceReport>,
}

/// Run every step of `config` in order, stopping at the first error.
///
/// The version is validated before any step runs, so a bad version leaves
/// both the generated sources and the resource outputs untouched.
pub fn run_build(config: &BuildConfig) -> BuildResult<BuildSummary> {
    let version = Version::parse(&config.version)?;
    info!("Building version {} (snapshot: {})", version, version.is_snapshot());

    let mut summary = BuildSummary {
        version: config.version.clone(),
        ..Default::default()
    };

    match config.generation_request() {
        Some(request) => {
            let generator = VersionFileGenerator::new();
            generator.generate(&request)?;
            summary.versions_file = Some(generator.target_path(&request)?);
        }
        None => warn!("No versions_file configured, skipping source generation"),
    }

    for set in config.resource_sets() {
        summary.resources.push(resources::process_resources(&set)?);
    }

    Ok(summary)
}

/// Load `path` and build it.
pub fn run_build_file(path: &Path) -> BuildResult<BuildSummary> {
    let config = BuildConfig::load(path)?;
    run_build(&config)
}
