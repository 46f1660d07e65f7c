use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("word length must be greater than 0")]
    InvalidLength,
    #[error("text is empty")]
    EmptyText,
}

pub type Result<T> = std::result::Result<T, Error>;
