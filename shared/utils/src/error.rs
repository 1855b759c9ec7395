use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RevisioError {
    #[error("Could not read document: {message}")]
    Extraction { message: String },

    #[error("LLM query error: {message}")]
    LlmQuery { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl RevisioError {
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    pub fn llm_query(message: impl Into<String>) -> Self {
        Self::LlmQuery {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Extraction { .. } => "EXTRACTION_ERROR",
            Self::LlmQuery { .. } => "LLM_QUERY_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Extraction { .. } => 422,
            Self::LlmQuery { .. } => 502,
            Self::Validation { .. } => 400,
            Self::Configuration { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }
}

pub type RevisioResult<T> = Result<T, RevisioError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<RevisioError> for ErrorResponse {
    fn from(error: RevisioError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
        }
    }
}

// Conversion from common error types
impl From<reqwest::Error> for RevisioError {
    fn from(error: reqwest::Error) -> Self {
        Self::llm_query(error.to_string())
    }
}

impl From<serde_json::Error> for RevisioError {
    fn from(error: serde_json::Error) -> Self {
        Self::llm_query(format!("malformed provider response: {}", error))
    }
}

impl From<std::io::Error> for RevisioError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(error.to_string())
    }
}
