// sparkify-core/src/infrastructure/config/pipeline.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::pipeline::PipelineConfig;
use crate::error::SparkifyError;
use crate::infrastructure::error::InfrastructureError;

const CANDIDATES: [&str; 3] = ["sparkify.yaml", "sparkify.yml", "pipeline.yaml"];

#[instrument(skip(project_dir))]
pub fn load_pipeline_config(project_dir: &Path) -> Result<PipelineConfig, SparkifyError> {
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading pipeline configuration");

    let content = fs::read_to_string(&config_path)?;
    let mut config = parse_pipeline_config(&content, &config_path)?;

    // SPARKIFY_REGION=eu-west-1 sparkify render ...
    apply_env_overrides(&mut config);

    config.validate().map_err(DomainError::from)?;
    Ok(config)
}

pub fn parse_pipeline_config(content: &str, origin: &Path) -> Result<PipelineConfig, SparkifyError> {
    serde_yaml::from_str(content).map_err(|source| {
        InfrastructureError::Yaml {
            path: origin.display().to_string(),
            source,
        }
        .into()
    })
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No pipeline file in {:?}. Checked: {:?}",
                root, CANDIDATES
            ))
        })
}

fn apply_env_overrides(config: &mut PipelineConfig) {
    if let Ok(val) = std::env::var("SPARKIFY_REGION") {
        info!(old = %config.region, new = %val, "Overriding region via ENV");
        config.region = val;
    }
    if let Ok(val) = std::env::var("SPARKIFY_CREDENTIAL_REF") {
        info!("Overriding credential_ref via ENV");
        config.credential_ref = val;
    }
}
