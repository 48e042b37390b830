pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        "gpt-4".to_string()
    }

    pub fn default_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        2000
    }

    pub fn default_temperature() -> f32 {
        0.2
    }

    pub fn default_timeout_secs() -> u64 {
        25
    }

    pub fn default_api_key_env() -> String {
        "OPENAI_API_KEY".to_string()
    }

    pub fn default_temp_dir() -> String {
        "./temp".to_string()
    }

    pub fn default_cleanup_delay_secs() -> u64 {
        5
    }

    pub fn default_max_files() -> usize {
        10
    }

    pub fn default_max_file_bytes() -> usize {
        10_000
    }

    pub fn default_port() -> u16 {
        3000
    }

    pub fn default_api_keys_env() -> String {
        "VALID_API_KEYS".to_string()
    }

    pub fn default_allowed_origins() -> Vec<String> {
        vec![
            "http://localhost:8080".to_string(),
            "http://localhost:5173".to_string(),
        ]
    }
}
