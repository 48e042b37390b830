use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq)]
pub enum FixStatus {
    #[serde(rename = "fixed")]
    Fixed,
    #[serde(rename = "failed")]
    Failed,
}

impl FixStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixStatus::Fixed => "fixed",
            FixStatus::Failed => "failed",
        }
    }
}
