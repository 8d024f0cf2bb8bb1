use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GuardError {
    #[error("CSS file not found: {}", .0.display())]
    ArtifactNotFound(PathBuf),
    #[error("cannot read CSS file {}: {source}", path.display())]
    ArtifactUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },
    #[error("invalid content glob {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GuardError {
    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            GuardError::ArtifactNotFound(_) => "ARTIFACT_NOT_FOUND",
            GuardError::InvalidConfig { .. } => "CONFIG_INVALID",
            GuardError::InvalidPattern { .. } => "PATTERN_INVALID",
            GuardError::ArtifactUnreadable { .. } | GuardError::Io(_) => "IO_ERROR",
        }
    }
}

/// Maps any error surfaced by a command to its JSON error code.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<GuardError>()
        .map(GuardError::code)
        .or_else(|| err.downcast_ref::<std::io::Error>().map(|_| "IO_ERROR"))
        .unwrap_or("INTERNAL")
}
