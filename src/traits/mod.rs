pub mod ai_provider;
pub mod issue_detector;
