// ─── pe-build Core ───
// Build tooling for the PacketEvents library.
//
// Architecture:
//   core/
//     version/    — `MAJOR.MINOR.PATCH[+COMMIT-SNAPSHOT]` parser
//     codegen/    — PEVersions source template + generator
//     resources/  — Resource copy with `${property}` expansion
//     config/     — JSON build description
//     fs          — Atomic writes, directory creation

pub mod codegen;
pub mod config;
pub mod error;
pub mod fs;
pub mod resources;
pub mod version;
