use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub base: i64,
    pub speed_bonus: i64,
    pub efficiency_penalty: i64,
    #[serde(rename = "final")]
    pub final_score: i64,
}
