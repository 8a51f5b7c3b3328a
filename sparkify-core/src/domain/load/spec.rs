// sparkify-core/src/domain/load/spec.rs

use serde::Serialize;
use validator::Validate;

use crate::domain::error::DomainError;

pub const AUTO_JSON_PATH: &str = "auto";
pub const DEFAULT_DELIMITER: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum FileFormat {
    /// `json_path` of `None` (or blank, or "auto") lets the warehouse map keys itself.
    Json { json_path: Option<String> },
    Csv { delimiter: String },
}

impl FileFormat {
    /// Resolves a declarative format tag. Unknown tags are rejected here so
    /// that no statement is ever built with a guessed format.
    pub fn from_tag(
        tag: &str,
        json_path: Option<String>,
        delimiter: Option<String>,
    ) -> Result<Self, DomainError> {
        match tag.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json { json_path }),
            "csv" => Ok(Self::Csv {
                delimiter: delimiter.unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            }),
            _ => Err(DomainError::UnsupportedFormat(tag.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Json { .. } => "json",
            Self::Csv { .. } => "csv",
        }
    }
}

/// Everything needed to bulk-load one staging table from object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct LoadSpec {
    #[validate(length(min = 1))]
    pub table: String,
    /// Object-store URI, used verbatim.
    #[validate(length(min = 1))]
    pub source_location: String,
    /// IAM role the warehouse assumes to read the source.
    #[validate(length(min = 1))]
    pub credential_ref: String,
    pub format: FileFormat,
    #[validate(length(min = 1))]
    pub region: String,
}

impl LoadSpec {
    pub fn json(
        table: impl Into<String>,
        source_location: impl Into<String>,
        credential_ref: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            source_location: source_location.into(),
            credential_ref: credential_ref.into(),
            format: FileFormat::Json { json_path: None },
            region: region.into(),
        }
    }

    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    /// Field-level validation, then format-level invariants.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        if let FileFormat::Csv { delimiter } = &self.format
            && delimiter.is_empty()
        {
            return Err(DomainError::Configuration(format!(
                "csv load into '{}' requires a delimiter",
                self.table
            )));
        }
        Ok(())
    }
}
