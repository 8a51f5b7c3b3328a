// sparkify/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sparkify")]
#[command(about = "Staging, load and data-quality tasks for the Sparkify warehouse", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prints the TRUNCATE / COPY / INSERT statements of the configured pipeline
    Render {
        /// Project directory (holds sparkify.yaml)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Execution date used in templated source locations (default: today, UTC)
        #[arg(long, short = 'd')]
        execution_date: Option<NaiveDate>,
    },

    /// Prints one insert template, or lists them when no name is given
    Template {
        /// songplays | users | songs | artists | time
        name: Option<String>,
    },

    /// Runs the configured data-quality suites against a DuckDB database
    Check {
        /// Project directory (holds sparkify.yaml)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Path to the DuckDB database file
        #[arg(long, default_value = "sparkify.duckdb", env = "SPARKIFY_DB_PATH")]
        db_path: String,

        /// Run only this suite
        #[arg(long, short)]
        suite: Option<String>,

        /// Emit the reports as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_render_defaults() -> Result<()> {
        let args = Cli::parse_from(["sparkify", "render"]);
        match args.command {
            Commands::Render {
                project_dir,
                execution_date,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert_eq!(execution_date, None);
                Ok(())
            }
            _ => bail!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parse_render_date() -> Result<()> {
        let args = Cli::parse_from([
            "sparkify",
            "render",
            "--execution-date",
            "2018-11-01",
            "--project-dir",
            "/tmp",
        ]);
        match args.command {
            Commands::Render {
                project_dir,
                execution_date,
            } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
                assert_eq!(execution_date, NaiveDate::from_ymd_opt(2018, 11, 1));
                Ok(())
            }
            _ => bail!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from(["sparkify", "render", "-d", "2018-13-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check() -> Result<()> {
        let args = Cli::parse_from(["sparkify", "check", "--suite", "core", "--json"]);
        match args.command {
            Commands::Check {
                suite, json, ..
            } => {
                assert_eq!(suite.as_deref(), Some("core"));
                assert!(json);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }
}
