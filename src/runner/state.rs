use crate::probe::ProbeKind;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Probe execution status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProbeStatus {
    Pending,
    Running,
    Passed,
    Failed { error: String },
    Skipped { reason: String },
}

impl ProbeStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, ProbeStatus::Passed)
    }
}

/// State for a single probe execution
#[derive(Debug, Clone)]
pub struct ProbeState {
    pub index: usize,
    pub name: String,
    pub kind: ProbeKind,
    pub status: ProbeStatus,
    pub started_at: Option<Instant>,
    pub duration_ms: Option<u64>,
}

impl ProbeState {
    pub fn new(index: usize, name: &str, kind: ProbeKind) -> Self {
        Self {
            index,
            name: name.to_string(),
            kind,
            status: ProbeStatus::Pending,
            started_at: None,
            duration_ms: None,
        }
    }

    pub fn start(&mut self) {
        self.status = ProbeStatus::Running;
        self.started_at = Some(Instant::now());
    }

    pub fn pass(&mut self) {
        self.finish(ProbeStatus::Passed);
    }

    pub fn fail(&mut self, error: String) {
        self.finish(ProbeStatus::Failed { error });
    }

    pub fn skip(&mut self, reason: String) {
        self.finish(ProbeStatus::Skipped { reason });
    }

    fn finish(&mut self, status: ProbeStatus) {
        self.status = status;
        if let Some(start) = self.started_at {
            self.duration_ms = Some(start.elapsed().as_millis() as u64);
        }
    }

    /// Serializable view (Instant is dropped)
    pub fn to_report(&self) -> ProbeStateReport {
        ProbeStateReport {
            index: self.index,
            name: self.name.clone(),
            kind: self.kind,
            status: self.status.clone(),
            duration_ms: self.duration_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeStateReport {
    pub index: usize,
    pub name: String,
    pub kind: ProbeKind,
    pub status: ProbeStatus,
    pub duration_ms: Option<u64>,
}

/// State of a whole verification run
#[derive(Debug, Clone)]
pub struct RunState {
    pub session_id: String,
    pub base_url: String,
    pub probes: Vec<ProbeState>,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
}

impl RunState {
    pub fn new(session_id: &str, base_url: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            base_url: base_url.to_string(),
            probes: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn add_probe(&mut self, probe: ProbeState) {
        self.probes.push(probe);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Instant::now());
    }

    pub fn summary(&self) -> RunSummary {
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for probe in &self.probes {
            match probe.status {
                ProbeStatus::Passed => passed += 1,
                ProbeStatus::Failed { .. } => failed += 1,
                ProbeStatus::Skipped { .. } => skipped += 1,
                _ => {}
            }
        }

        let total_duration_ms = self.started_at.map(|start| {
            self.finished_at
                .unwrap_or_else(Instant::now)
                .duration_since(start)
                .as_millis() as u64
        });

        RunSummary {
            session_id: self.session_id.clone(),
            total: self.probes.len() as u32,
            passed,
            failed,
            skipped,
            total_duration_ms,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.summary().all_passed()
    }

    /// 0 when every probe passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub session_id: String,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total_duration_ms: Option<u64>,
}

impl RunSummary {
    /// Skipped probes count against the run
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn not_passed(&self) -> u32 {
        self.total - self.passed
    }
}
