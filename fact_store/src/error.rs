//! Errors raised while building or loading skill resources.

use std::path::PathBuf;

/// Everything that can go wrong when assembling a resource table.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("fact collection is empty")]
    EmptyFacts,

    #[error("phrase set is empty")]
    EmptyPhrases,

    #[error("message `{0}` is empty")]
    EmptyMessage(&'static str),

    #[error("locale `{0}` is defined more than once")]
    DuplicateLocale(String),

    #[error("no resources registered for locale `{0}`")]
    UnknownLocale(String),

    #[error("failed to read resource file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML resource table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON resource table: {0}")]
    Json(#[from] serde_json::Error),
}
