pub mod persistence;
pub mod pipeline;

pub use pipeline::{DepthPipeline, ExtractResult, RunResult};
