use std::path::PathBuf;
use chrono::Utc;

use crate::config::constants::RESULTS_FILE_NAME;
use crate::errors::{FixAgentError, FixAgentResult};
use crate::helpers::naming;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::repository::Repository;
use crate::structs::results_artifact::{ArtifactFix, ResultsArtifact};

pub struct ResultPersister;

impl ResultPersister {
    pub fn build_artifact(result: &AnalysisResult, team: &str, leader: &str) -> ResultsArtifact {
        ResultsArtifact {
            team_name: naming::upper_identifier(team),
            leader_name: naming::upper_identifier(leader),
            branch_name: naming::branch_name(team, leader),
            bugs_detected: result.bugs_detected,
            fixes_applied: result.fixes_applied,
            execution_time: result.execution_time.clone(),
            score: result.score.final_score,
            cicd_status: result.cicd_result,
            iterations: result.cicd_runs.len(),
            fixes: result.fixes.iter()
                .map(|fix| ArtifactFix {
                    file: fix.file.clone(),
                    bug_type: fix.bug_type,
                    line: fix.line,
                    description: fix.commit_message.clone(),
                    status: fix.status,
                })
                .collect(),
            timestamp: Utc::now(),
        }
    }

    /// Writes `<workspace>/results.json`. Must run before the workspace is released.
    pub fn persist(repository: &Repository, result: &AnalysisResult, team: &str, leader: &str) -> FixAgentResult<PathBuf> {
        let path = repository.workspace_path.join(RESULTS_FILE_NAME);
        let artifact = Self::build_artifact(result, team, leader);

        let json = serde_json::to_string_pretty(&artifact)
            .map_err(|e| FixAgentError::persist_error(&path.to_string_lossy(), &e.to_string()))?;
        std::fs::write(&path, json)
            .map_err(|e| FixAgentError::persist_error(&path.to_string_lossy(), &e.to_string()))?;

        log::info!("💾 Results saved to {}", path.display());
        Ok(path)
    }
}
