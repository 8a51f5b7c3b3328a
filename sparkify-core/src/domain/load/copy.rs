// sparkify-core/src/domain/load/copy.rs

// Pure SQL assembly for the staging step. Nothing here touches the network;
// the executor finds out at run time whether the source actually exists.

use super::spec::{AUTO_JSON_PATH, FileFormat, LoadSpec};
use crate::domain::error::DomainError;

/// Builds the Redshift `COPY` that bulk-loads `spec.source_location` into
/// `spec.table`. Invalid specs produce an error and no SQL.
pub fn build_copy_statement(spec: &LoadSpec) -> Result<String, DomainError> {
    spec.check()?;

    let format_clause = match &spec.format {
        FileFormat::Json { json_path } => match json_path.as_deref() {
            Some(path)
                if !path.trim().is_empty() && !path.eq_ignore_ascii_case(AUTO_JSON_PATH) =>
            {
                format!("FORMAT AS JSON {}", quote_literal(path))
            }
            _ => format!("FORMAT AS JSON '{}'", AUTO_JSON_PATH),
        },
        FileFormat::Csv { delimiter } => {
            format!("DELIMITER {} IGNOREHEADER 1", quote_literal(delimiter))
        }
    };

    let clauses = [
        format!("COPY {}", spec.table),
        format!("FROM {}", quote_literal(&spec.source_location)),
        format!("IAM_ROLE {}", quote_literal(&spec.credential_ref)),
        format_clause,
        "TIMEFORMAT as 'epochmillisecs'".to_string(),
        format!("REGION {}", quote_literal(&spec.region)),
        "COMPUPDATE OFF".to_string(),
        "STATUPDATE OFF".to_string(),
    ];

    Ok(format!("{};", clauses.join("\n")))
}

/// Table names come from trusted pipeline configuration and are emitted as-is.
pub fn build_truncate_statement(table: &str) -> String {
    format!("TRUNCATE TABLE {}", table)
}

// Single-quoted SQL literal; embedded quotes are doubled.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
