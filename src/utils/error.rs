use thiserror::Error;

#[derive(Error, Debug)]
pub enum EiError {
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to parse document from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("No table found with ID {table_id} at {url}")]
    NotFound { table_id: String, url: String },

    #[error("{message}")]
    MalformedRequest { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EiError {
    pub fn fetch_status(url: &str, status: u16) -> Self {
        EiError::Fetch {
            url: url.to_string(),
            status: Some(status),
            message: format!("upstream returned status code {}", status),
        }
    }

    pub fn fetch_transport(url: &str, err: &reqwest::Error) -> Self {
        EiError::Fetch {
            url: url.to_string(),
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    /// Stable machine-readable code surfaced to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            EiError::Fetch { .. } => "FETCH_ERROR",
            EiError::Parse { .. } => "PARSE_ERROR",
            EiError::NotFound { .. } => "NOT_FOUND",
            EiError::MalformedRequest { .. } => "MALFORMED_REQUEST",
            EiError::ConfigValidation { .. } | EiError::InvalidConfigValue { .. } => "CONFIG_ERROR",
            EiError::Io(_) | EiError::Serialization(_) | EiError::Csv(_) => "INTERNAL_ERROR",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EiError::Fetch { .. } | EiError::Parse { .. } | EiError::NotFound { .. } => {
                ErrorCategory::Upstream
            }
            EiError::MalformedRequest { .. } => ErrorCategory::Request,
            EiError::ConfigValidation { .. } | EiError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            EiError::Io(_) | EiError::Serialization(_) | EiError::Csv(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Upstream | ErrorCategory::Request => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EiError::Fetch { status: Some(_), .. } => {
                "Check that the postal code exists and the remote site is reachable"
            }
            EiError::Fetch { status: None, .. } => {
                "Check network connectivity and source.base_url"
            }
            EiError::Parse { .. } => "The remote site returned a body that could not be decoded as text",
            EiError::NotFound { .. } => {
                "The remote page layout may have changed; verify the configured table IDs"
            }
            EiError::MalformedRequest { .. } => {
                "Send a JSON body of the form {\"postal_code\": \"...\"}"
            }
            EiError::ConfigValidation { .. } | EiError::InvalidConfigValue { .. } => {
                "Fix the configuration file and restart"
            }
            EiError::Io(_) => "Check file paths and permissions",
            EiError::Serialization(_) | EiError::Csv(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, EiError>;
