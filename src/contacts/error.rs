use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("No contact found for {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ContactError>;
