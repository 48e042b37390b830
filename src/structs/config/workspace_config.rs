use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkspaceConfig {
    #[serde(default = "ConfigHelper::default_temp_dir")]
    pub temp_dir: String,

    #[serde(default = "ConfigHelper::default_cleanup_delay_secs")]
    pub cleanup_delay_secs: u64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            temp_dir: ConfigHelper::default_temp_dir(),
            cleanup_delay_secs: ConfigHelper::default_cleanup_delay_secs(),
        }
    }
}
