// Error types shared by the booking containers, the validator and the config loader
use thiserror::Error;

// Rejected form submissions, nothing is stored when one of these is returned
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out all fields. Missing: {0}")]
    EmptyField(&'static str),

    #[error("Phone number must start with '078' or '079' and contain 10 digits.")]
    InvalidPhone(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Container is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Container is empty")]
    Empty,

    #[error("Index {index} out of range for {len} bookings")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    #[error("Unknown tree node: {0}")]
    UnknownNode(usize),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Capacity must be at least 1: {0}")]
    ZeroCapacity(&'static str),

    #[error("JSON parse error: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
