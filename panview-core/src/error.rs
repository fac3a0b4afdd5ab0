//! Error types shared by the page controllers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanviewError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Preference storage failed: {0}")]
    Storage(String),

    #[error("Invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
}
