use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("appliance name must not be blank")]
    InvalidName,
    #[error("power must be greater than 0 W")]
    InvalidPower,
    #[error("invalid emission range: {0}")]
    InvalidEmission(&'static str),
    #[error("invalid emission query: {0}")]
    InvalidQuery(&'static str),
    #[error("{0}: already plugged in")]
    AlreadyPluggedIn(String),
    #[error("{0}: already unplugged")]
    AlreadyUnplugged(String),
}

pub type Result<T> = std::result::Result<T, Error>;
