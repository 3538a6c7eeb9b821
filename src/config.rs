//! Settings shared by all identifiers an engine generates.

use crate::check_digit::error::{CheckDigitError, CheckDigitResult};
use crate::check_digit::weights::Weights;

/// Length of a generated identifier (payload and check character) unless
/// configured otherwise.
pub const DEFAULT_IDENTIFIER_LENGTH: usize = 8;

/// Describes the identifiers to generate and how their check characters are
/// weighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Total identifier length including the check character.
    pub length: usize,
    /// Weighting applied when computing check characters.
    pub weights: Weights,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_IDENTIFIER_LENGTH,
            weights: Weights::Default,
        }
    }
}

impl GeneratorConfig {
    /// Replaces the total identifier length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Replaces the weighting sequence.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Rejects settings under which no identifier could be generated.
    pub fn validate(&self) -> CheckDigitResult<()> {
        if self.length < 2 {
            return Err(CheckDigitError::InvalidLength(self.length));
        }

        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_eight_characters_with_derived_weights() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length, 8);
        assert_eq!(config.weights, Weights::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_lengths_without_payload() {
        assert_eq!(
            GeneratorConfig::default().with_length(1).validate(),
            Err(CheckDigitError::InvalidLength(1))
        );
        assert_eq!(
            GeneratorConfig::default().with_length(0).validate(),
            Err(CheckDigitError::InvalidLength(0))
        );
        assert!(GeneratorConfig::default().with_length(2).validate().is_ok());
    }

    #[test]
    fn rejects_empty_weights() {
        let config = GeneratorConfig::default().with_weights(Weights::Custom(Vec::new()));
        assert_eq!(config.validate(), Err(CheckDigitError::EmptyWeightingSequence));
    }
}
