//! Error types for sci-calc
//!
//! Numeric domain and range conditions are never errors here: they are
//! reported in-band as NaN or infinity. `CalcError` only covers misuse of the
//! named-operation interface by a host.

use thiserror::Error;

/// Host interface errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation '{operation}' takes {expected} argument(s), got {got}")]
    Arity {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CalcError {
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    pub fn arity(operation: &'static str, expected: usize, got: usize) -> Self {
        Self::Arity {
            operation,
            expected,
            got,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
