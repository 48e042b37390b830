use thiserror::Error;

/// Failure of a single detector. Never escapes the fallback detector.
#[derive(Debug, Clone, Error)]
pub enum DetectionError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("API Error: {0}")]
    Api(String),
    #[error("Authentication Error: {0}")]
    Authentication(String),
    #[error("Timed out after {0}s")]
    Timeout(u64),
    #[error("Serialization Error: {0}")]
    Serialization(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
