use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use serde_json::Value;

use crate::config::constants::REMOTE_MAX_ISSUES;
use crate::enums::detection_error::DetectionError;
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::helpers::prompt_generator;
use crate::helpers::response_cleaner::strip_code_fences;
use crate::prompts::issue_detection_prompt::ISSUE_DETECTION_SYSTEM_PROMPT;
use crate::structs::ai::raw_issue::RawIssue;
use crate::structs::issue::Issue;
use crate::traits::ai_provider::AiProvider;
use crate::traits::issue_detector::IssueDetector;

/// Asks the reasoning service for issues, bounded by a per-file timeout.
pub struct RemoteDetector {
    provider: Arc<dyn AiProvider>,
    timeout: Duration,
}

impl RemoteDetector {
    pub fn new(provider: Arc<dyn AiProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Parses the service reply. Anything other than a JSON array is a failure.
    pub fn parse_issues(response: &str) -> Result<Vec<Issue>, DetectionError> {
        let body = strip_code_fences(response);
        let value: Value = serde_json::from_str(body)
            .map_err(|e| DetectionError::MalformedResponse(e.to_string()))?;

        let Value::Array(records) = value else {
            return Err(DetectionError::MalformedResponse("expected a JSON array of issues".to_string()));
        };

        let issues = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<RawIssue>(record) {
                Ok(raw) => Self::convert(raw),
                Err(e) => {
                    log::debug!("Skipping unreadable issue record: {}", e);
                    None
                }
            })
            .take(REMOTE_MAX_ISSUES)
            .collect();

        Ok(issues)
    }

    fn convert(raw: RawIssue) -> Option<Issue> {
        let Some(issue_type) = raw.issue_type.as_deref().and_then(IssueType::parse) else {
            log::debug!("Skipping issue record with unknown type {:?}", raw.issue_type);
            return None;
        };

        let line = match &raw.line {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(1),
            Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(1),
            _ => 1,
        };

        Some(Issue {
            issue_type,
            line: usize::try_from(line).unwrap_or(1).max(1),
            message: raw.message.unwrap_or_default().trim().to_string(),
            severity: raw.severity.as_deref().and_then(Severity::parse).unwrap_or_default(),
            suggested_fix: raw.suggested_fix.filter(|s| !s.trim().is_empty()),
        })
    }
}

#[async_trait]
impl IssueDetector for RemoteDetector {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn detect(&self, code: &str, relative_path: &str, language: &str) -> Result<Vec<Issue>, DetectionError> {
        let prompt = prompt_generator::generate_prompt(code, relative_path, language);
        let call = self.provider.chat(ISSUE_DETECTION_SYSTEM_PROMPT.to_string(), vec![prompt]);

        let response = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| DetectionError::Timeout(self.timeout.as_secs()))??;

        Self::parse_issues(&response)
    }
}
