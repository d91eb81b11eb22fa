use thiserror::Error;

pub mod commands {
    pub mod extract;
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Could not serialize the result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No colors or fonts found. The input does not look like styled CSS.")]
    NoDesignData,
}
