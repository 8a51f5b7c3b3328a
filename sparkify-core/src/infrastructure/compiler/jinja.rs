// sparkify-core/src/infrastructure/compiler/jinja.rs

// Renders templated source locations ("s3://bucket/log-data/{{ year }}/{{ month }}")
// into the concrete URI a COPY reads from.

use minijinja::{Environment, UndefinedBehavior};

use crate::application::ports::TemplateEngine;
use crate::error::SparkifyError;
use crate::infrastructure::error::InfrastructureError;

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // A typo in a placeholder must not silently load the wrong prefix.
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        // s3_uri('bucket', 'log-data') -> "s3://bucket/log-data"
        env.add_function("s3_uri", |bucket: String, key: String| -> String {
            format!(
                "s3://{}/{}",
                bucket.trim_end_matches('/'),
                key.trim_start_matches('/')
            )
        });

        Self { env }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, SparkifyError> {
        self.env
            .render_str(template, context)
            .map_err(|e| SparkifyError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}
