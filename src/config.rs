use crate::{
    error::{Result, SortlistError},
    storage::validate_key,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Settings shared by the image sorter and todo views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the todo list is stored under
    pub storage_key: String,
    /// File extension accepted by the image import, without the dot
    pub import_extension: String,
    /// Prefix of the exported file name, followed by the export date
    pub export_prefix: String,
    /// Distance in pixels a pressed pointer must travel before a drag starts
    pub drag_activation_distance: f64,
}

impl Config {
    pub const DEFAULT_STORAGE_KEY: &'static str = "todos";
    pub const DEFAULT_IMPORT_EXTENSION: &'static str = "txt";
    pub const DEFAULT_EXPORT_PREFIX: &'static str = "sorted-images";
    pub const DEFAULT_DRAG_ACTIVATION_DISTANCE: f64 = 5.0;

    /// Parses a JSON configuration document; missing fields take their defaults
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(contents)
            .map_err(|e| SortlistError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key).map_err(|_| {
            SortlistError::ConfigError(format!(
                "storage_key must be non-empty ASCII letters, digits, '-', '_' or '.', got '{}'",
                self.storage_key
            ))
        })?;
        if self.import_extension.is_empty() || self.import_extension.starts_with('.') {
            return Err(SortlistError::ConfigError(format!(
                "import_extension must be a bare extension, got '{}'",
                self.import_extension
            )));
        }
        if self.export_prefix.trim().is_empty() {
            return Err(SortlistError::ConfigError(
                "export_prefix must not be empty".to_string(),
            ));
        }
        if !self.drag_activation_distance.is_finite() || self.drag_activation_distance < 0.0 {
            return Err(SortlistError::ConfigError(format!(
                "drag_activation_distance must be a non-negative number, got {}",
                self.drag_activation_distance
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            import_extension: Self::DEFAULT_IMPORT_EXTENSION.to_string(),
            export_prefix: Self::DEFAULT_EXPORT_PREFIX.to_string(),
            drag_activation_distance: Self::DEFAULT_DRAG_ACTIVATION_DISTANCE,
        }
    }
}
