use crate::core::version::Version;

/// Renders the versions source file for one target language.
///
/// Implementations are pure: the output depends only on the arguments.
pub trait SourceTemplate {
    /// File name without extension, e.g. `PEVersions`.
    fn file_stem(&self) -> &str;

    /// Source extension without the dot, e.g. `java`.
    fn extension(&self) -> &str;

    fn render(&self, package_name: &str, raw: &str, version: &Version) -> String;

    fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), self.extension())
    }
}

/// Emits `PEVersions.java`: a final class of constants whose private
/// constructor throws.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTemplate;

impl SourceTemplate for JavaTemplate {
    fn file_stem(&self) -> &str {
        "PEVersions"
    }

    fn extension(&self) -> &str {
        "java"
    }

    fn render(&self, package_name: &str, raw: &str, version: &Version) -> String {
        let unknown = Version::UNKNOWN;
        format!(
            r#"/**
 * This file is generated by the auto-version task. Modifying it will have no effect.
 */
package {package};

public final class {class} {{

    public static final String RAW = "{raw}";
    public static final PEVersion CURRENT = new PEVersion({major}, {minor}, {patch}, {commit});
    public static final PEVersion UNKNOWN = new PEVersion({u_major}, {u_minor}, {u_patch});

    private {class}() {{
        throw new IllegalStateException();
    }}
}}
"#,
            package = package_name,
            class = self.file_stem(),
            raw = raw,
            major = version.major,
            minor = version.minor,
            patch = version.patch,
            commit = version.quoted_snapshot_commit(),
            u_major = unknown.major,
            u_minor = unknown.minor,
            u_patch = unknown.patch,
        )
    }
}
