/// Error types for the Cloudcast core library
use thiserror::Error;

/// Main error type for Cloudcast operations
#[derive(Error, Debug)]
pub enum CloudcastError {
    /// A JSON payload crossing the JS bridge could not be decoded
    #[error("Failed to decode bridge payload: {0}")]
    PayloadDecode(#[from] serde_json::Error),

    /// The map view failed to initialize
    #[error("Map initialization failed: {0}")]
    MapInit(String),
}
