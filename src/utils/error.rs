use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid CSS selector: {selector}")]
    SelectorError { selector: String },

    #[error("Input file is missing required column '{column}'")]
    MissingColumnError { column: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::CsvError(_) | Self::SerializationError(_) | Self::MissingColumnError { .. } => {
                ErrorCategory::Data
            }
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SelectorError { .. } | Self::ProcessingError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::MissingColumnError { .. }
            | Self::ProcessingError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SelectorError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::HttpError(_) => {
                "Check your network connection; PubMed may also be rate-limiting, try a larger --delay".to_string()
            }
            Self::CsvError(_) => {
                "Verify the input file is valid CSV with a header row".to_string()
            }
            Self::MissingColumnError { column } => {
                format!("Add a '{}' column to the input CSV header", column)
            }
            Self::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            Self::SerializationError(_) => {
                "Re-run with --verbose to see which record failed to serialize".to_string()
            }
            Self::SelectorError { .. } => {
                "The built-in selector table is invalid; this is a bug in pubmed-scrape".to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Provide a value for '{}' on the command line or in the config file", field)
            }
            Self::InvalidConfigValueError { field, .. }
            | Self::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            Self::ProcessingError { .. } => {
                "Re-run with --verbose to see which URL triggered the failure".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) => format!("A network request failed: {}", e),
            Self::CsvError(e) => format!("Could not process CSV data: {}", e),
            Self::IoError(e) => format!("A file operation failed: {}", e),
            Self::SerializationError(e) => format!("Could not serialize results: {}", e),
            Self::SelectorError { selector } => {
                format!("Internal error while preparing extractor '{}'", selector)
            }
            Self::MissingColumnError { column } => {
                format!("The input CSV has no '{}' column", column)
            }
            Self::MissingConfigError { field } => format!("Configuration is missing '{}'", field),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
