use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixAgentError {
    // Workspace errors
    #[error("Failed to clone repository: {reason}")]
    Acquisition {
        repository: String,
        reason: String,
    },

    #[error("Failed to create branch '{branch}': {reason}")]
    Branch {
        branch: String,
        reason: String,
    },

    // Inventory errors
    #[error("Failed to scan repository files in '{path}': {reason}")]
    Scan {
        path: String,
        reason: String,
    },

    // Artifact errors
    #[error("Failed to write results artifact '{path}': {reason}")]
    Persist {
        path: String,
        reason: String,
    },

    // Anything unexpected mid-pipeline
    #[error("Analysis failed during {stage}: {reason}")]
    Analysis {
        stage: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FixAgentError {
    pub fn acquisition_error(repository: &str, reason: &str) -> Self {
        Self::Acquisition {
            repository: repository.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn branch_error(branch: &str, reason: &str) -> Self {
        Self::Branch {
            branch: branch.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn scan_error(path: &str, reason: &str) -> Self {
        Self::Scan {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn persist_error(path: &str, reason: &str) -> Self {
        Self::Persist {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn analysis_error(stage: &str, reason: &str) -> Self {
        Self::Analysis {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    /// Name of the pipeline stage the error belongs to.
    pub fn stage(&self) -> &str {
        match self {
            Self::Acquisition { .. } => "acquisition",
            Self::Branch { .. } => "branch",
            Self::Scan { .. } => "scan",
            Self::Persist { .. } => "persist",
            Self::Analysis { stage, .. } => stage,
            Self::Configuration { .. } => "configuration",
            Self::Io(_) => "io",
            Self::Json(_) => "serialization",
        }
    }

    /// The underlying failure text without the stage prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::Acquisition { reason, .. }
            | Self::Branch { reason, .. }
            | Self::Scan { reason, .. }
            | Self::Persist { reason, .. }
            | Self::Analysis { reason, .. } => reason.clone(),
            Self::Configuration { message, .. } => message.clone(),
            Self::Io(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Acquisition { .. } => true,
            Self::Configuration { .. } => true,
            Self::Persist { .. } => true,
            Self::Branch { .. } => false,
            Self::Scan { .. } => false,
            Self::Analysis { .. } => false,
            Self::Io(_) => false,
            Self::Json(_) => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Analysis { .. } => ErrorSeverity::Critical,
            Self::Scan { .. } => ErrorSeverity::High,
            Self::Branch { .. } => ErrorSeverity::High,
            Self::Io(_) => ErrorSeverity::High,
            Self::Acquisition { .. } => ErrorSeverity::Medium,
            Self::Json(_) => ErrorSeverity::Medium,
            Self::Persist { .. } => ErrorSeverity::Low,
            Self::Configuration { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { message, field } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                msg
            }
            Self::Acquisition { repository, reason } => {
                format!("Could not clone '{}': {}\n💡 Check the repository URL and your network connection", repository, reason)
            }
            Self::Persist { path, reason } => {
                format!("Results were computed but '{}' could not be written: {}", path, reason)
            }
            other => other.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for fix-agent operations
pub type FixAgentResult<T> = Result<T, FixAgentError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &FixAgentError) {
        let severity = error.severity();

        log::error!("[{}] {:?}", severity.name(), error);
        log::error!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            log::info!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}
