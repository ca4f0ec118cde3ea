use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("status file '{path}' is malformed: {detail}")]
    MalformedStatus { path: PathBuf, detail: String },

    #[error("no compose front-end found: install the docker compose plugin or docker-compose")]
    ComposeToolMissing,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
