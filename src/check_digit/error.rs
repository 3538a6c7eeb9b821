//! Precondition failures reported by the check-digit engine.

use std::fmt::{Display, Formatter};

/// Every way a check-digit operation can reject its inputs.
///
/// All variants are local precondition failures. Nothing is retried and no
/// partial result is produced; the caller fixes its inputs and calls again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckDigitError {
    /// The input is too short: empty for check-character computation, or
    /// shorter than payload plus check character for validation.
    InvalidInput(String),
    /// A requested identifier length below two.
    InvalidLength(usize),
    /// An explicit weighting sequence without any weights.
    EmptyWeightingSequence,
    /// An item of a textual weighting list which is not a non-negative integer.
    InvalidWeight(String),
}

impl Display for CheckDigitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckDigitError::InvalidInput(message) => write!(f, "Invalid input: {}", message),
            CheckDigitError::InvalidLength(length) => write!(
                f,
                "Invalid identifier length {}: at least one payload character and the check character are required",
                length
            ),
            CheckDigitError::EmptyWeightingSequence => {
                write!(f, "The weighting sequence must contain at least one weight")
            }
            CheckDigitError::InvalidWeight(item) => {
                write!(f, "'{}' is not a valid weight", item)
            }
        }
    }
}

impl std::error::Error for CheckDigitError {}

pub type CheckDigitResult<T> = Result<T, CheckDigitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            CheckDigitError::InvalidWeight("x".to_string()).to_string(),
            "'x' is not a valid weight"
        );
        assert!(CheckDigitError::InvalidLength(1).to_string().contains('1'));
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = CheckDigitError::EmptyWeightingSequence.into();
        assert!(err.downcast_ref::<CheckDigitError>().is_some());
    }
}
