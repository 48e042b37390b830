use crate::prompts::issue_detection_prompt::ISSUE_RECORD_SCHEMA;

pub fn generate_prompt(code: &str, relative_path: &str, language: &str) -> String {
    format!(
        "You are an expert code analyzer. Analyze this code for bugs and issues.\n\n\
         File: {}\n\
         Language: {}\n\n\
         Code:\n```\n{}\n```\n\n\
         {}",
        relative_path, language, code, ISSUE_RECORD_SCHEMA
    )
}
