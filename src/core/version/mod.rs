pub mod pe_version;

pub use pe_version::Version;
