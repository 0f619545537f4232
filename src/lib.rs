mod commands;
mod core;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use crate::commands::{run_build, run_build_file, BuildSummary};
pub use crate::core::codegen::{
    generate, GenerationRequest, JavaTemplate, SourceTemplate, VersionFileGenerator,
};
pub use crate::core::config::{BuildConfig, VersionsFileConfig};
pub use crate::core::error::{BuildError, BuildResult, TemplateError};
pub use crate::core::resources::{expand, process_resources, ResourceReport, ResourceSet};
pub use crate::core::version::Version;

#[derive(Parser, Debug)]
#[command(name = "pe-build", about = "Generate PEVersions sources and process resources")]
struct Cli {
    /// JSON build description.
    #[arg(default_value = crate::core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

pub fn run() -> ExitCode {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pe_build=debug")),
        )
        .init();

    let cli = Cli::parse();
    info!("pe-build starting with {:?}", cli.config);

    match run_build_file(&cli.config) {
        Ok(summary) => {
            info!(
                "Build finished: versions file {:?}, {} resource set(s)",
                summary.versions_file,
                summary.resources.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Build failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
