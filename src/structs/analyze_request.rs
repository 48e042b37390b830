use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub leader: String,
}

impl AnalyzeRequest {
    pub fn new(repo: &str, team: &str, leader: &str) -> Self {
        Self {
            repo: repo.to_string(),
            team: team.to_string(),
            leader: leader.to_string(),
        }
    }

    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.repo.trim().is_empty() {
            missing.push("repo");
        }
        if self.team.trim().is_empty() {
            missing.push("team");
        }
        if self.leader.trim().is_empty() {
            missing.push("leader");
        }
        missing
    }
}
