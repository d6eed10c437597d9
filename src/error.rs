use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    InvalidSequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisError {
    pub code: ErrorCode,
    pub message: String,
}

impl AnalysisError {
    pub fn invalid_sequence() -> Self {
        Self {
            code: ErrorCode::InvalidSequence,
            message: "Invalid DNA sequence. Please enter a valid sequence containing only A, T, C, and G.".to_string(),
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sequence_message() {
        let err = AnalysisError::invalid_sequence();
        assert_eq!(err.code, ErrorCode::InvalidSequence);
        assert_eq!(
            err.to_string(),
            "Invalid DNA sequence. Please enter a valid sequence containing only A, T, C, and G."
        );
    }
}
