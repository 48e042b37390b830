use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::run_status::RunStatus;

/// One canned snapshot of a simulated CI iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRun {
    pub id: usize,
    pub iteration: usize,
    pub status: RunStatus,
    pub timestamp: DateTime<Utc>,
    pub duration: String,
    pub tests_run: u32,
    pub tests_passed: u32,
    pub checks: Vec<String>,
}
