// sparkify/src/commands/render.rs
//
// USE CASE: show exactly what the staging and load tasks would send to the warehouse.

use chrono::NaiveDate;
use miette::WrapErr;
use std::path::PathBuf;
use tracing::info;

use sparkify_core::application::{RunContext, plan_staging, resolve_load_spec};
use sparkify_core::infrastructure::compiler::jinja::JinjaRenderer;
use sparkify_core::infrastructure::config::load_pipeline_config;

pub fn execute(project_dir: PathBuf, execution_date: Option<NaiveDate>) -> miette::Result<()> {
    let config = load_pipeline_config(&project_dir).wrap_err_with(|| {
        format!("Failed to load pipeline configuration from {:?}", project_dir)
    })?;
    let ctx = execution_date.map(RunContext::new).unwrap_or_else(RunContext::today);
    let renderer = JinjaRenderer::new();
    info!(
        pipeline = %config.name,
        execution_date = %ctx.execution_date,
        staging = config.staging.len(),
        loads = config.loads.len(),
        "Rendering pipeline statements"
    );

    println!("-- pipeline: {} (execution date {})", config.name, ctx.execution_date);

    for task in &config.staging {
        let spec = resolve_load_spec(task, &config, &renderer, &ctx)
            .wrap_err_with(|| format!("Invalid staging task for table '{}'", task.table))?;
        let statements = plan_staging(&spec, task.truncate)
            .wrap_err_with(|| format!("Cannot build COPY for table '{}'", task.table))?;

        println!("\n-- [staging] {}", spec.table);
        print_statements(&statements);
    }

    for load in &config.loads {
        println!(
            "\n-- [load] {} ({:?})",
            load.template.target_table(),
            load.effective_mode()
        );
        print_statements(&load.statements());
    }

    Ok(())
}

fn print_statements(statements: &[String]) {
    for sql in statements {
        if sql.trim_end().ends_with(';') {
            println!("{}", sql);
        } else {
            println!("{};", sql);
        }
    }
}
