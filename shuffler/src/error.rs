use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShuffleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entropy source error: {0}")]
    Entropy(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, ShuffleError>;
