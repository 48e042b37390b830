pub mod config;
pub mod ai_config;
pub mod workspace_config;
pub mod analysis_config;
pub mod server_config;
