use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use deploy_verifier::{report, runner, utils::config::Config};

#[derive(Parser)]
#[command(name = "deploy-verifier")]
#[command(version = "0.1.0")]
#[command(about = "Verify a deployed todo backend end to end", long_about = None)]
struct Cli {
    /// Also write results.json and junit.xml into this directory
    #[arg(long, value_name = "DIR")]
    report: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::default();

    let run = runner::verify_deployment(&config).await?;

    if let Some(dir) = cli.report {
        println!("\n{} Writing reports to: {}", "📊".blue(), dir.display());
        report::write_reports(&run, &dir)?;
    }

    Ok(ExitCode::from(run.exit_code()))
}
