// sparkify-core/src/domain/pipeline/mod.rs

pub mod configuration;

pub use configuration::{CheckSuite, PipelineConfig, StagingTask};
