pub mod openai;
pub mod raw_issue;
