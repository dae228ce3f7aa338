use thiserror::Error;
use tombola_types::TombolaError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read participants file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("participants file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] TombolaError),
}
