use serde::{Deserialize, Serialize};
use crate::enums::run_status::RunStatus;
use crate::structs::fix::Fix;
use crate::structs::score::Score;
use crate::structs::verification_run::VerificationRun;

/// Outcome of one analysis run, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub repo: String,
    pub team_name: String,
    pub leader_name: String,
    pub branch: String,
    pub bugs_detected: usize,
    pub fixes_applied: usize,
    pub cicd_result: RunStatus,
    pub execution_time: String,
    pub score: Score,
    pub fixes: Vec<Fix>,
    pub cicd_runs: Vec<VerificationRun>,
}
