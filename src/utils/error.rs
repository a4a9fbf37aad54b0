use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl StatsError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::ApiError(e) if e.is_timeout() => {
                "The vacancy API did not answer in time".to_string()
            }
            StatsError::ApiError(_) => "Could not reach the vacancy API".to_string(),
            StatsError::HttpStatusError { status, .. } => {
                format!("The vacancy API rejected the request (HTTP {})", status)
            }
            StatsError::CsvError(_) | StatsError::IoError(_) => {
                "Could not write the report".to_string()
            }
            StatsError::SerializationError(_) => {
                "The vacancy API returned data that could not be read".to_string()
            }
            StatsError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            StatsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            StatsError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatsError::ApiError(_) => "Check your network connection or raise timeout_seconds",
            StatsError::HttpStatusError { status: 401 | 403, .. } => {
                "Set SJ_TOKEN (or api_key in the config) to a valid SuperJob app key"
            }
            StatsError::HttpStatusError { .. } => "Try again later; the page was skipped",
            StatsError::CsvError(_) | StatsError::IoError(_) => {
                "Check that stdout is writable"
            }
            StatsError::SerializationError(_) => "The API format may have changed",
            StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. }
            | StatsError::ConfigValidationError { .. } => {
                "Fix the configuration file or command-line flags and rerun"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StatsError::MissingConfigError { .. }
                | StatsError::InvalidConfigValueError { .. }
                | StatsError::ConfigValidationError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
