use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_max_files")]
    pub max_files: usize,

    #[serde(default = "ConfigHelper::default_max_file_bytes")]
    pub max_file_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_files: ConfigHelper::default_max_files(),
            max_file_bytes: ConfigHelper::default_max_file_bytes(),
        }
    }
}
