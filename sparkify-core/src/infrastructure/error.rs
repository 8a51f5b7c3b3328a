// sparkify-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::database::duckdb),
        help("An error occurred inside the local SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Quality query returned a non-numeric value: {0}")]
    #[diagnostic(
        code(sparkify::infra::database::non_numeric),
        help("A check query must select a single numeric column.")
    )]
    NonNumericScalar(String),

    #[error("Connection lock poisoned")]
    #[diagnostic(code(sparkify::infra::database::poisoned))]
    Poisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("YAML Parsing Error in {path}: {source}")]
    #[diagnostic(
        code(sparkify::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Pipeline configuration not found: {0}")]
    #[diagnostic(code(sparkify::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(sparkify::infra::template),
        help("Check the {{ ... }} placeholders in the source location.")
    )]
    TemplateError(#[from] minijinja::Error),
}

// Shortcut so `?` works directly on duckdb calls.
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
