use serde::{Deserialize, Serialize};
use crate::enums::fix_status::FixStatus;
use crate::enums::issue_type::IssueType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    pub id: usize,
    pub file: String,
    pub bug_type: IssueType,
    pub line: usize,
    pub commit_message: String,
    pub status: FixStatus,
}
