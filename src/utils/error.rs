use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Input file '{path}' does not exist")]
    MissingInputError { path: String },

    #[error("Permission denied while accessing '{path}'")]
    PermissionDeniedError { path: String },

    #[error("File '{path}' is not valid UTF-8 text")]
    DecodeError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unexpected error: {message}")]
    UnexpectedError { message: String },
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Permission,
    Decode,
    Io,
    Validation,
    Config,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ToolkitError {
    /// Classify a raw IO error against the path it occurred on.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ToolkitError::MissingInputError {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => ToolkitError::PermissionDeniedError {
                path: path.to_string(),
            },
            _ => ToolkitError::IoError(err),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolkitError::MissingInputError { .. } => ErrorCategory::Input,
            ToolkitError::PermissionDeniedError { .. } => ErrorCategory::Permission,
            ToolkitError::DecodeError { .. } => ErrorCategory::Decode,
            ToolkitError::IoError(_) => ErrorCategory::Io,
            ToolkitError::InvalidConfigValueError { .. }
            | ToolkitError::MissingConfigError { .. } => ErrorCategory::Validation,
            ToolkitError::ConfigError { .. } => ErrorCategory::Config,
            ToolkitError::UnexpectedError { .. } => ErrorCategory::Unknown,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ToolkitError::MissingInputError { .. } | ToolkitError::DecodeError { .. } => {
                ErrorSeverity::Medium
            }
            ToolkitError::PermissionDeniedError { .. } | ToolkitError::IoError(_) => {
                ErrorSeverity::High
            }
            ToolkitError::InvalidConfigValueError { .. }
            | ToolkitError::MissingConfigError { .. }
            | ToolkitError::ConfigError { .. } => ErrorSeverity::Low,
            ToolkitError::UnexpectedError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolkitError::MissingInputError { path } => format!(
                "File '{}' not found. Please check the filename and try again.",
                path
            ),
            ToolkitError::PermissionDeniedError { path } => {
                format!("Permission denied while accessing '{}'.", path)
            }
            ToolkitError::DecodeError { path, .. } => format!(
                "File '{}' is not a valid text file or has encoding issues.",
                path
            ),
            ToolkitError::IoError(e) => format!("Unable to read or write file: {}", e),
            ToolkitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            ToolkitError::MissingConfigError { field } => {
                format!("Missing required configuration: {}", field)
            }
            ToolkitError::ConfigError { message } => message.clone(),
            ToolkitError::UnexpectedError { message } => {
                format!("An unexpected error occurred: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ToolkitError::MissingInputError { .. } => {
                "Check that the path is spelled correctly and the file exists".to_string()
            }
            ToolkitError::PermissionDeniedError { .. } => {
                "Check the file permissions or run with sufficient privileges".to_string()
            }
            ToolkitError::DecodeError { .. } => {
                "Make sure the file contains UTF-8 encoded text".to_string()
            }
            ToolkitError::IoError(_) => {
                "Check disk space and that the path is accessible".to_string()
            }
            ToolkitError::InvalidConfigValueError { .. }
            | ToolkitError::MissingConfigError { .. }
            | ToolkitError::ConfigError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            ToolkitError::UnexpectedError { .. } => {
                "Re-run with --verbose for more detail".to_string()
            }
        }
    }
}
