use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortlistError>;

#[derive(Debug, Error)]
pub enum SortlistError {
    #[error("Invalid file type: {file_name} (expected a .{expected} file)")]
    InvalidFileType { file_name: String, expected: String },

    #[error("Failed to read file {file_name}: {reason}")]
    FileReadFailed { file_name: String, reason: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid storage key: {0}")]
    InvalidStorageKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
