pub mod ai;
pub mod analysis_result;
pub mod analyze_request;
pub mod cli;
pub mod code_file;
pub mod config;
pub mod fix;
pub mod issue;
pub mod repository;
pub mod results_artifact;
pub mod score;
pub mod verification_run;
