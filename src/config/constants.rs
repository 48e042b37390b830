use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".fix-agent";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const TEMP_DIR_ENV: &str = "TEMP_DIR";
pub const PORT_ENV: &str = "PORT";

pub const RESULTS_FILE_NAME: &str = "results.json";
pub const BRANCH_SUFFIX: &str = "_AI_Fix";

/// Directory names never descended into by the file inventory.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "vendor",
    "dist",
    "build",
    "target",
    "__pycache__",
];

pub const SUPPORTED_FILE_EXTENSIONS: &[&str] = &["js", "ts", "jsx", "tsx", "py", "java", "go"];

pub const REMOTE_MAX_ISSUES: usize = 10;
pub const FALLBACK_MAX_PATTERN_ISSUES: usize = 5;

pub const VERIFICATION_TESTS_RUN: u32 = 47;
pub const VERIFICATION_FIRST_RUN_FAILED_PASSES: u32 = 35;
pub const VERIFICATION_SECOND_RUN_FAILED_PASSES: u32 = 42;
pub const VERIFICATION_FIRST_RUN_THRESHOLD: usize = 10;
pub const VERIFICATION_SECOND_RUN_THRESHOLD: usize = 5;

pub const SPEED_BONUS_MAX: i64 = 20;
pub const ITERATION_PENALTY: i64 = 2;

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
