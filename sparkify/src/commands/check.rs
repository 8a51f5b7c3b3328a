// sparkify/src/commands/check.rs
//
// USE CASE: run the data-quality gate locally against a DuckDB copy of the warehouse.

use comfy_table::{Table, presets::UTF8_FULL};
use miette::{IntoDiagnostic, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

use sparkify_core::application::run_suite;
use sparkify_core::domain::pipeline::CheckSuite;
use sparkify_core::domain::quality::SuiteReport;
use sparkify_core::infrastructure::adapters::duckdb::DuckDBExecutor;
use sparkify_core::infrastructure::config::load_pipeline_config;

pub async fn execute(
    project_dir: PathBuf,
    db_path: String,
    suite: Option<String>,
    json: bool,
) -> miette::Result<()> {
    if !Path::new(&db_path).exists() {
        miette::bail!("Database not found at: {}", db_path);
    }

    let config = load_pipeline_config(&project_dir).wrap_err_with(|| {
        format!("Failed to load pipeline configuration from {:?}", project_dir)
    })?;

    let suites: Vec<&CheckSuite> = match &suite {
        Some(name) => vec![
            config
                .suite(name)
                .ok_or_else(|| miette::miette!("No quality suite named '{}'", name))?,
        ],
        None => config.quality.iter().collect(),
    };
    if suites.is_empty() {
        miette::bail!("No quality suites configured in {:?}", project_dir);
    }

    let executor = DuckDBExecutor::new(&db_path)
        .wrap_err_with(|| format!("Failed to open DuckDB at {}", db_path))?;

    let mut reports = Vec::with_capacity(suites.len());
    for suite in suites {
        info!(suite = %suite.name, checks = suite.checks.len(), "Running quality suite");
        let report = run_suite(&suite.name, &suite.checks, &executor).await?;
        reports.push(report);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", rendered);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let failed: Vec<String> = reports
        .into_iter()
        .filter_map(|r| r.into_result().err())
        .map(|e| e.to_string())
        .collect();
    if !failed.is_empty() {
        for message in &failed {
            eprintln!("{}", message);
        }
        miette::bail!("{} quality suite(s) failed", failed.len());
    }
    Ok(())
}

fn print_report(report: &SuiteReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Query", "Actual", "Result", "Detail"]);

    for result in &report.results {
        table.add_row(vec![
            result.index.to_string(),
            result.query.clone(),
            result
                .actual
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if result.passed { "PASS" } else { "FAIL" }.to_string(),
            result.detail.clone(),
        ]);
    }

    println!("\nSuite: {}", report.suite);
    println!("{table}");
}
