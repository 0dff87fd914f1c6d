use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Source directory not found at {path}")]
    SourceDirNotFound { path: String },

    #[error("README not found at {path}")]
    ReadmeNotFound { path: String },

    #[error("Could not find section marker '{marker}'")]
    MarkerNotFound { marker: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ToolkitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::SourceDirNotFound { .. }
            | Self::ReadmeNotFound { .. }
            | Self::MarkerNotFound { .. }
            | Self::ValidationError { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::RegexError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Every failure is terminal; the tools never retry.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::SourceDirNotFound { .. } => {
                "Run from the project root or pass --root / --src-dir".to_string()
            }
            Self::ReadmeNotFound { .. } => {
                "Create README.md or point --readme at the right file".to_string()
            }
            Self::MarkerNotFound { marker } => format!(
                "Add the heading '{}' to the README so the section can be located",
                marker
            ),
            Self::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } | Self::MissingConfigError { field } => {
                format!("Check the '{}' setting", field)
            }
            Self::IoError(_) => "Check file permissions and that the paths exist".to_string(),
            Self::ValidationError { .. } | Self::ProcessingError { .. } => {
                "Check the input data and try again".to_string()
            }
            Self::SerializationError(_) | Self::RegexError(_) => {
                "This is likely a bug; re-run with -v and report the log".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MarkerNotFound { .. } => {
                "Could not find section markers in README.md".to_string()
            }
            Self::SourceDirNotFound { path } => format!("Error: src directory not found at {}", path),
            Self::ReadmeNotFound { path } => format!("Error: README.md not found at {}", path),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
