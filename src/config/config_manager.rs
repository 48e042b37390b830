use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, PORT_ENV, TEMP_DIR_ENV};
use crate::errors::{FixAgentError, FixAgentResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the explicit path if given, else the home config, else defaults.
    /// Environment overrides are applied last.
    pub fn load(explicit_path: Option<&str>) -> FixAgentResult<Config> {
        let mut config = match explicit_path {
            Some(path) => Self::load_from_path(Path::new(path))?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from_path(&path)?,
                _ => Config::default(),
            },
        };

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> FixAgentResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            FixAgentError::config_error(&format!("cannot read {}: {}", path.display(), e), None)
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> FixAgentResult<Config> {
        toml::from_str(content)
            .map_err(|e| FixAgentError::config_error(e.message(), None))
    }

    pub fn apply_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(temp_dir) = lookup(TEMP_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.workspace.temp_dir = temp_dir;
        }

        if let Some(port) = lookup(PORT_ENV) {
            match port.trim().parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(_) => log::warn!("⚠️ Ignoring invalid {} value: {}", PORT_ENV, port),
            }
        }
    }

    pub fn create_sample_config() -> FixAgentResult<PathBuf> {
        let sample_config = r#"# Fix Agent configuration

[ai]
provider = "openai"
model = "gpt-4"
base_url = "https://api.openai.com/v1"
temperature = 0.2
max_tokens = 2000
# Seconds to wait for one file's analysis before using the local heuristics
timeout_secs = 25
# Environment variable holding the API key; when unset the local heuristics are used
api_key_env = "OPENAI_API_KEY"

[workspace]
# Root under which repositories are cloned (overridden by TEMP_DIR)
temp_dir = "./temp"
# Grace period before a finished workspace is removed
cleanup_delay_secs = 5

[analysis]
max_files = 10
max_file_bytes = 10000

[server]
# Overridden by PORT
port = 3000
# Client keys accepted by the API, merged with the comma-separated VALID_API_KEYS
api_keys = []
api_keys_env = "VALID_API_KEYS"
allowed_origins = ["http://localhost:8080", "http://localhost:5173"]
"#;
        let config_file_path = Self::default_config_path()
            .ok_or_else(|| FixAgentError::config_error("home directory not found", None))?;

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    fn is_valid_origin(origin: &str) -> bool {
        let Some((scheme, authority)) = origin.split_once("://") else {
            return false;
        };
        matches!(scheme, "http" | "https")
            && !authority.is_empty()
            && !authority.contains(['/', ' ', '?', '#'])
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.analysis.max_files == 0 {
            errors.push("analysis.max_files must be greater than zero".to_string());
        }

        if config.analysis.max_file_bytes == 0 {
            errors.push("analysis.max_file_bytes must be greater than zero".to_string());
        }

        if config.ai.timeout_secs == 0 {
            errors.push("ai.timeout_secs must be greater than zero".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be within 0.0..=2.0, got {}", config.ai.temperature));
        }

        if config.workspace.temp_dir.trim().is_empty() {
            errors.push("workspace.temp_dir must not be empty".to_string());
        }

        for origin in &config.server.allowed_origins {
            if !Self::is_valid_origin(origin) {
                errors.push(format!("server.allowed_origins entry is not a scheme://host[:port] origin: {}", origin));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
