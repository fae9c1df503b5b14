use std::path::PathBuf;

/// Failures raised while bringing configuration and alarm data into the
/// tool. The scoring core itself has no error paths; everything that can
/// go wrong happens before an [`crate::model::Alarm`] reaches it.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("config unreadable: {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config malformed: {path}: {source}")]
    ConfigMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("input unreadable: {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input malformed: {path}: {source}")]
    InputMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::ConfigUnreadable { .. } | LoadError::ConfigMalformed { .. } => 4,
            LoadError::InputUnreadable { .. } => 2,
            LoadError::InputMalformed { .. } => 3,
        }
    }
}
