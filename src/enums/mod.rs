pub mod commands;
pub mod detection_error;
pub mod fix_status;
pub mod issue_type;
pub mod run_status;
pub mod severity;
