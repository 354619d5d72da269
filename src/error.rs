use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("github error: {0}")]
    GitHub(#[from] octocrab::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
