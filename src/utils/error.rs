use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Unknown service: {value}")]
    UnknownService { value: String },

    #[error("Unknown duration: {value}")]
    UnknownDuration { value: String },

    #[error("Selection change rejected: {reason}")]
    SelectionRejected { reason: String },

    #[error("Contact form invalid ({field}): {message}")]
    ContactValidationError { field: String, message: String },

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Remote service returned {status}: {message}")]
    RemoteStatusError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::UnknownService { .. }
            | SiteError::UnknownDuration { .. }
            | SiteError::SelectionRejected { .. }
            | SiteError::ContactValidationError { .. } => ErrorCategory::Input,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::ApiError(_) | SiteError::RemoteStatusError { .. } => {
                ErrorCategory::Network
            }
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 被拒絕的選擇只是 UI 規則，狀態不變
            SiteError::SelectionRejected { .. } => ErrorSeverity::Low,
            SiteError::ApiError(_) | SiteError::RemoteStatusError { .. } => ErrorSeverity::Medium,
            SiteError::UnknownService { .. }
            | SiteError::UnknownDuration { .. }
            | SiteError::ContactValidationError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::UnknownService { .. } => {
                "Use one of: gym, personal-training (pt), nutrition".to_string()
            }
            SiteError::UnknownDuration { .. } => "Use one of: 1, 3, 6, 12".to_string(),
            SiteError::SelectionRejected { .. } => {
                "Select another service before removing gym access".to_string()
            }
            SiteError::ContactValidationError { field, .. } => {
                format!("Check the '{}' field and submit again", field)
            }
            SiteError::ApiError(_) => {
                "Check network connectivity and the configured endpoint".to_string()
            }
            SiteError::RemoteStatusError { status, .. } if *status >= 500 => {
                "The remote service failed; retry later".to_string()
            }
            SiteError::RemoteStatusError { .. } => {
                "The remote service rejected the request; check the submitted fields".to_string()
            }
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            SiteError::IoError(_) => "Check file paths and permissions".to_string(),
            SiteError::SerializationError(_) => {
                "The remote service returned an unexpected payload".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Could not reach the remote service: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}
