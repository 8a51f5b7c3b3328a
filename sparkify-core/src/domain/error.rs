// sparkify-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Configuration Error: {0}")]
    #[diagnostic(
        code(sparkify::domain::configuration),
        help("Check the task definition in your pipeline file.")
    )]
    Configuration(String),

    #[error("Unsupported file format: '{0}'")]
    #[diagnostic(
        code(sparkify::domain::unsupported_format),
        help("Use 'json' or 'csv'.")
    )]
    UnsupportedFormat(String),

    #[error("Unknown insert template: '{0}'")]
    #[diagnostic(
        code(sparkify::domain::unknown_template),
        help("Available templates: songplays, users, songs, artists, time.")
    )]
    UnknownTemplate(String),

    #[error("Data quality suite '{suite}' failed: {failed}/{total} checks failed\n{summary}")]
    #[diagnostic(code(sparkify::domain::quality_gate))]
    QualityGateFailed {
        suite: String,
        failed: usize,
        total: usize,
        summary: String,
    },
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Configuration(errors.to_string())
    }
}
