pub mod issue_detection_prompt;
