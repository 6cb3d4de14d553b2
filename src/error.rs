use thiserror::Error;

// Unified error type for moldyn

#[derive(Error, Debug)]
pub enum LinalgError {
    #[error("division by zero at element {index}")]
    DivisionByZero { index: usize },
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
