pub mod config;
pub mod intake;
pub mod ruler;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod wave;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaterlineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for WaterlineError {
    fn from(e: std::io::Error) -> Self {
        WaterlineError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for WaterlineError {
    fn from(e: serde_json::Error) -> Self {
        WaterlineError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for WaterlineError {
    fn from(e: toml::de::Error) -> Self {
        WaterlineError::ConfigError(e.to_string())
    }
}

impl WaterlineError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A bad config needs the user to edit the file
            WaterlineError::ConfigError(_) => false,
            // Preference writes are retried on the next change
            WaterlineError::StorageError(_) => true,
            WaterlineError::IOError(_) => true,
            WaterlineError::SerializationError(_) => true,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            WaterlineError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            WaterlineError::StorageError(_) => {
                "Could not save your progress. It will be retried.".to_string()
            }
            WaterlineError::IOError(_) => "File system error occurred.".to_string(),
            WaterlineError::SerializationError(_) => {
                "Saved preferences are unreadable and were ignored.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WaterlineError>;
