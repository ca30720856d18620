//! Synthesis error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    /// Manifest serialization failed.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An assignment target derives from an account that the composed
    /// organization tree does not contain, so the reference cannot be
    /// expressed in the manifest.
    #[error("assignment target derives from unknown account '{name}'")]
    UnknownAccount { name: String },
}
