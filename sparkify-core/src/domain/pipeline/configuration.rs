// sparkify-core/src/domain/pipeline/configuration.rs

use serde::Deserialize;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::load::{FileFormat, TableLoad};
use crate::domain::quality::QualityCheck;

/// Declarative pipeline file: staging tasks, table loads, quality suites.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct PipelineConfig {
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(default = "default_region")]
    pub region: String,

    /// Default IAM role for every staging task.
    #[serde(default)]
    pub credential_ref: String,

    #[serde(default)]
    pub staging: Vec<StagingTask>,

    #[serde(default)]
    pub loads: Vec<TableLoad>,

    #[serde(default)]
    pub quality: Vec<CheckSuite>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StagingTask {
    pub table: String,
    /// Object-store URI; may contain execution-date placeholders.
    pub source: String,
    #[serde(default = "default_format")]
    pub format: String,
    pub json_path: Option<String>,
    pub delimiter: Option<String>,
    pub region: Option<String>,
    pub credential_ref: Option<String>,
    #[serde(default = "default_truncate")]
    pub truncate: bool,
}

impl StagingTask {
    pub fn file_format(&self) -> Result<FileFormat, DomainError> {
        FileFormat::from_tag(&self.format, self.json_path.clone(), self.delimiter.clone())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckSuite {
    pub name: String,
    #[serde(default)]
    pub checks: Vec<QualityCheck>,
}

impl PipelineConfig {
    pub fn suite(&self, name: &str) -> Option<&CheckSuite> {
        self.quality.iter().find(|s| s.name == name)
    }
}

fn default_region() -> String {
    "us-west-2".to_string()
}
fn default_format() -> String {
    "json".to_string()
}
fn default_truncate() -> bool {
    true
}
