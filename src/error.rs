use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: Strings ending with an underscore are not allowed.")]
    TrailingUnderscore,

    #[error("Invalid input: Strings ending with a dot are not allowed.")]
    TrailingDot,

    #[error("Unknown case style: {0}")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
