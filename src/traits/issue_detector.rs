use async_trait::async_trait;
use crate::enums::detection_error::DetectionError;
use crate::structs::issue::Issue;

#[async_trait]
pub trait IssueDetector: Send + Sync {
    fn name(&self) -> &'static str;

    async fn detect(&self, code: &str, relative_path: &str, language: &str) -> Result<Vec<Issue>, DetectionError>;
}
