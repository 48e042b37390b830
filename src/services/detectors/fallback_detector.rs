use std::sync::Arc;
use async_trait::async_trait;

use crate::config::constants::timeout_duration_secs;
use crate::enums::detection_error::DetectionError;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::detectors::local_heuristic_detector::LocalHeuristicDetector;
use crate::services::detectors::remote_detector::RemoteDetector;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::issue::Issue;
use crate::traits::issue_detector::IssueDetector;

/// Tries the primary detector and falls back to the local heuristics on any
/// failure, so detection always yields a list.
pub struct FallbackDetector {
    primary: Option<Arc<dyn IssueDetector>>,
    fallback: LocalHeuristicDetector,
}

impl FallbackDetector {
    pub fn new(primary: Option<Arc<dyn IssueDetector>>, fallback: LocalHeuristicDetector) -> Self {
        Self { primary, fallback }
    }

    /// Remote detection when a credential is present, local heuristics otherwise.
    pub fn from_config(config: &AiConfig, api_key: Option<String>) -> Self {
        let primary = api_key.map(|key| {
            let provider = Arc::new(OpenAIProvider::new(key, config));
            Arc::new(RemoteDetector::new(provider, timeout_duration_secs(config.timeout_secs))) as Arc<dyn IssueDetector>
        });

        match &primary {
            Some(_) => log::info!("🤖 Remote issue detection enabled ({} / {})", config.provider, config.model),
            None => log::info!("🧮 No {} set; using local heuristic detection", config.api_key_env),
        }

        Self::new(primary, LocalHeuristicDetector::new())
    }

    pub fn has_remote(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn detect_issues(&self, code: &str, relative_path: &str, language: &str) -> Vec<Issue> {
        if let Some(primary) = &self.primary {
            match primary.detect(code, relative_path, language).await {
                Ok(issues) => return issues,
                Err(e) => {
                    log::warn!("⚠️ {} detection failed for {}: {}; using local heuristics", primary.name(), relative_path, e);
                }
            }
        }

        self.fallback.scan(code, relative_path)
    }
}

#[async_trait]
impl IssueDetector for FallbackDetector {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn detect(&self, code: &str, relative_path: &str, language: &str) -> Result<Vec<Issue>, DetectionError> {
        Ok(self.detect_issues(code, relative_path, language).await)
    }
}
