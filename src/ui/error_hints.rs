use serde_json::{json, Value};
use crate::errors::FixAgentError;

/// Response body for a failed analysis, with remediation hints for the
/// failures users hit most often.
pub fn failure_body(error: &FixAgentError, repo: &str) -> Value {
    let reason = error.reason();
    let mut body = json!({
        "error": "Analysis failed",
        "message": error.to_string(),
        "stage": error.stage(),
    });

    if reason.contains("Filename too long") || reason.contains("checkout failed") {
        body["message"] = json!("Repository too large for Windows path limits");
        body["issue"] = json!("This repository has very long file paths that exceed Windows limits");
        body["solution"] = json!("Try a smaller repository or use WSL/Linux");
    } else if reason.contains("Repository not found") || reason.contains("not found") {
        body["message"] = json!("Repository not found. Please check:");
        body["checks"] = json!([
            "1. The repository URL is correct and complete",
            "2. The repository exists and is public",
            "3. You have access to the repository",
            "4. The URL is not truncated (check the full name)"
        ]);
        body["providedUrl"] = json!(repo);
        body["hint"] = json!("Try accessing the repository in your browser first to verify it exists");
    }

    body
}
