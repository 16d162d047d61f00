use thiserror::Error;

/// Errors produced by the search and selection routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument violated a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Selection was requested from an empty collection.
    #[error("cannot select from an empty collection")]
    EmptyInput,

    /// The requested rank does not exist in the collection.
    #[error("index {index} is out of bounds for a collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The predicate stayed false until the search bound overflowed.
    #[error("predicate never became true; last finite probe was {bound}")]
    NoTransition { bound: f64 },
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
