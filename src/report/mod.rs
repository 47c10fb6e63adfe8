pub mod json;
pub mod junit;
pub mod types;

use crate::runner::RunState;
use anyhow::{Context, Result};
use std::path::Path;

pub use types::VerificationResults;

/// Write JSON and JUnit reports for a finished run
pub fn write_reports(run: &RunState, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create report directory {}", output_dir.display())
    })?;

    let results = VerificationResults::from_run(run);
    json::write_report(&results, output_dir)?;
    junit::write_report(&results, output_dir)?;
    Ok(())
}
