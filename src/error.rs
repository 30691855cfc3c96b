use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopoPlanError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

impl TopoPlanError {
    pub fn is_config(&self) -> bool {
        matches!(self, TopoPlanError::Config(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TopoPlanError::InvalidInput(_))
    }
}

pub type TpResult<T> = Result<T, TopoPlanError>;
