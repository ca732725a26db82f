//! Error types for the RDoC workspace.

mod load_error;

pub use load_error::LoadError;

/// Top-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum RdocError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("domain not found: {domain}")]
    DomainNotFound { domain: String },

    #[error("matching failed: {reason}")]
    Matching { reason: String },

    #[error("evidence search failed: {reason}")]
    Search { reason: String },
}

/// Convenience alias used throughout the workspace.
pub type RdocResult<T> = Result<T, RdocError>;
