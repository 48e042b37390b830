pub mod api_server;
pub mod error_hints;
