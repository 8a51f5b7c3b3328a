// sparkify/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // RUST_LOG=debug sparkify check ... to see every statement.
    // Logs go to stderr so rendered SQL on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            project_dir,
            execution_date,
        } => commands::render::execute(project_dir, execution_date),
        Commands::Template { name } => commands::template::execute(name),
        Commands::Check {
            project_dir,
            db_path,
            suite,
            json,
        } => commands::check::execute(project_dir, db_path, suite, json).await,
    }
}
