use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::constants::BRANCH_SUFFIX;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Replaces each run of whitespace with a single underscore.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, "_").into_owned()
}

/// Uppercased, whitespace-collapsed identifier used in branch names and artifacts.
pub fn upper_identifier(value: &str) -> String {
    collapse_whitespace(&value.to_uppercase())
}

/// `<TEAM>_<LEADER>_AI_Fix`, the branch name downstream tooling expects.
pub fn branch_name(team: &str, leader: &str) -> String {
    format!("{}_{}{}", upper_identifier(team), upper_identifier(leader), BRANCH_SUFFIX)
}

pub fn workspace_dir_name(team: &str, leader: &str, unix_millis: i64) -> String {
    collapse_whitespace(&format!("{}_{}_{}", team, leader, unix_millis))
}

/// `"<minutes>m <seconds>s"` from elapsed milliseconds.
pub fn format_duration(elapsed_ms: u64) -> String {
    let seconds = elapsed_ms / 1000;
    format!("{}m {}s", seconds / 60, seconds % 60)
}
