pub mod console;
pub mod context;
pub mod executor;
pub mod state;

use crate::http::{HttpClient, ReqwestClient};
use crate::probe::{default_plan, ProbeSpec};
use crate::utils::config::Config;
use anyhow::Result;

pub use context::RunContext;
pub use executor::{ProbeExecutor, Verdict};
pub use state::*;

/// Run the default plan against the configured backend over real HTTP
pub async fn verify_deployment(config: &Config) -> Result<RunState> {
    let client = ReqwestClient::new(config.request_timeout)?;
    Ok(run_plan(&client, config, &default_plan()).await)
}

/// Run `plan` in order and print the report.
///
/// Always completes: a probe that cannot reach the backend is recorded as
/// failed and the next one runs.
pub async fn run_plan(client: &dyn HttpClient, config: &Config, plan: &[ProbeSpec]) -> RunState {
    let session_id = uuid::Uuid::new_v4().to_string();
    log::info!("verification session {} against {}", session_id, config.base_url);

    let mut run = RunState::new(&session_id, &config.base_url);
    let mut executor = ProbeExecutor::new(client, RunContext::new(config.clone()));

    console::print_banner(&config.base_url);
    run.start();

    for (index, spec) in plan.iter().enumerate() {
        console::print_section(index + 1, spec.kind.heading());

        let mut probe = ProbeState::new(index, &spec.name, spec.kind);
        probe.start();
        match executor.execute(spec).await {
            Verdict::Passed => probe.pass(),
            Verdict::Failed(error) => probe.fail(error),
            Verdict::Skipped(reason) => probe.skip(reason),
        }
        log::debug!("{} -> {:?}", spec.name, probe.status);
        run.add_probe(probe);
    }

    run.finish();
    console::print_summary(&run);
    run
}
