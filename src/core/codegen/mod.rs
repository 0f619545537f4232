pub mod generator;
pub mod template;

pub use generator::{generate, GenerationRequest, VersionFileGenerator};
pub use template::{JavaTemplate, SourceTemplate};
