mod expand;
mod processor;

pub use expand::expand;
pub use processor::{process_resources, ResourceReport, ResourceSet};
