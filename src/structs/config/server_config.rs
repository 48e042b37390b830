use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default)]
    pub api_keys: Vec<String>,

    #[serde(default = "ConfigHelper::default_api_keys_env")]
    pub api_keys_env: String,

    #[serde(default = "ConfigHelper::default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Allow-list of client keys: configured keys plus the comma-separated env value.
    pub fn resolve_api_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.api_keys.iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if let Ok(from_env) = std::env::var(&self.api_keys_env) {
            for key in from_env.split(',').map(str::trim).filter(|k| !k.is_empty()) {
                if !keys.iter().any(|existing| existing == key) {
                    keys.push(key.to_string());
                }
            }
        }

        keys
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: ConfigHelper::default_port(),
            api_keys: Vec::new(),
            api_keys_env: ConfigHelper::default_api_keys_env(),
            allowed_origins: ConfigHelper::default_allowed_origins(),
        }
    }
}
