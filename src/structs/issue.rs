use serde::{Deserialize, Serialize};
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub line: usize,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Issue {
    pub fn new(issue_type: IssueType, line: usize, message: &str, severity: Severity) -> Self {
        Self {
            issue_type,
            line: line.max(1),
            message: message.to_string(),
            severity,
            suggested_fix: None,
        }
    }
}
