mod build_config;

pub use build_config::{BuildConfig, VersionsFileConfig, DEFAULT_CONFIG_FILE};
