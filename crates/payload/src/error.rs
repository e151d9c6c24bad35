use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
