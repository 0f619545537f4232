use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the build tooling.
/// Every module returns `Result<T, BuildError>`.
#[derive(Debug, Error)]
pub enum BuildError {
    // ── Version ─────────────────────────────────────────
    #[error("Invalid version: {0}")]
    InvalidVersionFormat(String),

    #[error("Invalid package name: {0:?}")]
    InvalidPackageName(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Resources ───────────────────────────────────────
    #[error("Template error in {path:?}: {source}")]
    Template {
        path: PathBuf,
        source: TemplateError,
    },

    #[error("Filtered resource is not valid UTF-8: {0:?}")]
    NonUtf8Resource(PathBuf),

    #[error("Invalid resource pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("Resource walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    // ── Config ──────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures raised while expanding `${name}` placeholders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown property '{name}' at byte {offset}")]
    UnknownProperty { name: String, offset: usize },

    #[error("unterminated '${{' at byte {offset}")]
    Unterminated { offset: usize },

    #[error("unsupported expression '{expr}' at byte {offset}")]
    UnsupportedExpression { expr: String, offset: usize },
}

/// Convenience alias used throughout the crate.
pub type BuildResult<T> = Result<T, BuildError>;

impl BuildError {
    /// Attach a path to an IO error; used with `map_err`.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| BuildError::Io { path, source }
    }
}
