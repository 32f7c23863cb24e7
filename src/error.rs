use thiserror::Error;

/// Convenience type for operations that can fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the containers in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested key is not stored in the container.
    #[error("key not found")]
    KeyNotFound,
    /// A positional accessor was given an index outside of the container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The arguments of an operation do not satisfy its documented precondition.
    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),
}
