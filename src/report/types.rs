use crate::runner::state::{ProbeStateReport, RunState, RunSummary};
use serde::{Deserialize, Serialize};

/// Finished run, as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResults {
    pub session_id: String,
    pub base_url: String,
    pub probes: Vec<ProbeStateReport>,
    pub summary: RunSummary,
    pub generated_at: String,
}

impl VerificationResults {
    pub fn from_run(run: &RunState) -> Self {
        Self {
            session_id: run.session_id.clone(),
            base_url: run.base_url.clone(),
            probes: run.probes.iter().map(|p| p.to_report()).collect(),
            summary: run.summary(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
