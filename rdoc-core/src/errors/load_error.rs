/// Taxonomy load errors. Fatal to startup: the store never attempts a
/// partial load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read taxonomy source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse taxonomy source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid taxonomy shape at {path}: {reason}")]
    Shape { path: String, reason: String },
}

impl LoadError {
    pub(crate) fn shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
