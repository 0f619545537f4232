// ─── Version File Generator ───
// Writes `<output_dir>/<package path>/PEVersions.java` from a version string.

use std::path::{Component, Path, PathBuf};

use tracing::info;

use super::template::{JavaTemplate, SourceTemplate};
use crate::core::error::{BuildError, BuildResult};
use crate::core::fs;
use crate::core::version::Version;

/// Inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Dotted package, e.g. `com.github.retrooper.packetevents.util`.
    pub package_name: String,
    /// Raw version string, embedded verbatim as `RAW`.
    pub version: String,
    /// Root of the generated sources tree.
    pub output_dir: PathBuf,
}

impl GenerationRequest {
    pub fn new(
        package_name: impl Into<String>,
        version: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            version: version.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Package path (`a.b.c` → `a/b/c`) under the output directory.
    ///
    /// Every dotted segment must be a single plain path component, so the
    /// result always stays inside `output_dir`.
    pub fn package_dir(&self) -> BuildResult<PathBuf> {
        let mut dir = self.output_dir.clone();
        for segment in self.package_name.split('.') {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) => dir.push(segment),
                _ => return Err(BuildError::InvalidPackageName(self.package_name.clone())),
            }
        }
        Ok(dir)
    }
}

/// Stateless generator; every call fully rewrites the target file.
#[derive(Debug, Clone, Default)]
pub struct VersionFileGenerator<T = JavaTemplate> {
    template: T,
}

impl VersionFileGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: SourceTemplate> VersionFileGenerator<T> {
    pub fn with_template(template: T) -> Self {
        Self { template }
    }

    /// Where [`generate`](Self::generate) writes for this request.
    pub fn target_path(&self, request: &GenerationRequest) -> BuildResult<PathBuf> {
        Ok(request.package_dir()?.join(self.template.file_name()))
    }

    /// Render the file content without touching disk.
    pub fn render(&self, request: &GenerationRequest) -> BuildResult<String> {
        let version = Version::parse(&request.version)?;
        Ok(self
            .template
            .render(&request.package_name, &request.version, &version))
    }

    /// Parse the version, then replace the target file with the rendered
    /// source. A rejected version or package name leaves the filesystem
    /// untouched.
    pub fn generate(&self, request: &GenerationRequest) -> BuildResult<()> {
        let version = Version::parse(&request.version)?;
        let contents = self
            .template
            .render(&request.package_name, &request.version, &version);

        let dir = request.package_dir()?;
        fs::ensure_dir(&dir)?;

        let target = dir.join(self.template.file_name());
        info!(
            "Generating {} with version {}",
            self.template.file_name(),
            version
        );
        fs::write_atomic(&target, contents.as_bytes())
    }
}

/// Generate `PEVersions.java` for `package_name` under `output_dir`.
pub fn generate(package_name: &str, version: &str, output_dir: &Path) -> BuildResult<()> {
    VersionFileGenerator::new().generate(&GenerationRequest::new(
        package_name,
        version,
        output_dir,
    ))
}
