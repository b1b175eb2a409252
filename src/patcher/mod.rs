pub mod patches;
pub mod pipeline;

pub use pipeline::{Patch, PatchPipeline};
