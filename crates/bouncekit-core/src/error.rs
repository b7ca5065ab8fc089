use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid elements descriptor: {0}")]
    InvalidElements(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, Error>;
