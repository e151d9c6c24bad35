use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scan root: {0}")]
    InvalidRoot(String),

    /// No recognized files were accepted. Distinct from a successful but
    /// small scan so callers can short-circuit downstream consumers.
    #[error("no recognized source files found")]
    EmptyScan,

    #[error("Payload error: {0}")]
    Payload(#[from] atlas_payload::PayloadError),
}
