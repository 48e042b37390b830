pub mod config_helper;
pub mod naming;
pub mod prompt_generator;
pub mod response_cleaner;
