//! Error types for engine input validation.

use adhtc_core::CoreError;
use thiserror::Error;

/// Raised only by `validate()`; evaluation itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Input(#[from] CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err: EngineError = CoreError::OutOfRange {
            what: "moisture_pct",
            value: 120.0,
            expected: "[0, 100]",
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("moisture_pct"));
        assert!(msg.contains("120"));
    }
}
