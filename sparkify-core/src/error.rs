// sparkify-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SparkifyError {
    // --- DOMAIN (configuration, formats, quality gate) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (database, IO, YAML, templates) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for SparkifyError {
    fn from(err: std::io::Error) -> Self {
        SparkifyError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for SparkifyError {
    fn from(err: duckdb::Error) -> Self {
        SparkifyError::Infrastructure(InfrastructureError::from(err))
    }
}
