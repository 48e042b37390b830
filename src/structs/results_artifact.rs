use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::fix_status::FixStatus;
use crate::enums::issue_type::IssueType;
use crate::enums::run_status::RunStatus;

/// On-disk shape of `results.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsArtifact {
    pub team_name: String,
    pub leader_name: String,
    pub branch_name: String,
    pub bugs_detected: usize,
    pub fixes_applied: usize,
    pub execution_time: String,
    pub score: i64,
    pub cicd_status: RunStatus,
    pub iterations: usize,
    pub fixes: Vec<ArtifactFix>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactFix {
    pub file: String,
    pub bug_type: IssueType,
    pub line: usize,
    pub description: String,
    pub status: FixStatus,
}
