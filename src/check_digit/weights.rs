//! Weighting sequences applied to the characters of a payload.
//!
//! A caller either supplies its own sequence ([`Weights::Custom`]) or lets the
//! engine derive one from the payload length ([`Weights::Default`]). The
//! derived sequence places the highest weight first, the second highest last,
//! and keeps alternating inwards:
//!
//! ```text
//! length 4: [4, 2, 1, 3]
//! length 7: [7, 5, 3, 1, 2, 4, 6]
//! ```
//!
//! Previously issued identifiers are validated by rebuilding this sequence,
//! so its layout must never change.

use crate::check_digit::error::{CheckDigitError, CheckDigitResult};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Selects the weighting sequence of a check-digit operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Weights {
    /// Derive the sequence from the payload length via [`default_weighting`].
    #[default]
    Default,
    /// Use the given sequence, cycling it when the payload is longer.
    ///
    /// Weights are non-negative. Negative weights cannot be expressed, and a
    /// textual list containing one is rejected with
    /// [`CheckDigitError::InvalidWeight`].
    Custom(Vec<u32>),
}

impl Weights {
    /// Shorthand for `Weights::Custom(weights.into())`.
    pub fn custom(weights: impl Into<Vec<u32>>) -> Self {
        Weights::Custom(weights.into())
    }

    /// Resolves the sequence to apply to a payload of `len` characters.
    ///
    /// Custom sequences are borrowed as-is (their length is independent of
    /// `len`); an empty one is rejected.
    pub fn resolve(&self, len: usize) -> CheckDigitResult<Cow<'_, [u32]>> {
        match self {
            Weights::Default => Ok(Cow::Owned(default_weighting(len))),
            Weights::Custom(weights) if weights.is_empty() => {
                Err(CheckDigitError::EmptyWeightingSequence)
            }
            Weights::Custom(weights) => Ok(Cow::Borrowed(weights.as_slice())),
        }
    }

    /// Checks the sequence without a payload at hand.
    pub fn validate(&self) -> CheckDigitResult<()> {
        match self {
            Weights::Custom(weights) if weights.is_empty() => {
                Err(CheckDigitError::EmptyWeightingSequence)
            }
            _ => Ok(()),
        }
    }
}

impl Display for Weights {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Weights::Default => write!(f, "default"),
            Weights::Custom(weights) => {
                for (index, weight) in weights.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", weight)?;
                }

                Ok(())
            }
        }
    }
}

/// Parses a comma separated list such as `7,5,3,1,2,4,6`.
///
/// Whitespace around items is ignored. The literal `default` selects
/// [`Weights::Default`].
impl FromStr for Weights {
    type Err = CheckDigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("default") {
            return Ok(Weights::Default);
        }
        if s.is_empty() {
            return Err(CheckDigitError::EmptyWeightingSequence);
        }

        s.split(',')
            .map(str::trim)
            .map(|item| {
                item.parse::<u32>()
                    .map_err(|_| CheckDigitError::InvalidWeight(item.to_string()))
            })
            .collect::<CheckDigitResult<Vec<_>>>()
            .map(Weights::Custom)
    }
}

/// Builds the default weighting sequence for a payload of `len` characters.
///
/// Weights count down from `len`, alternately filling the leftmost and the
/// rightmost free slot. A length of zero yields an empty sequence.
pub fn default_weighting(len: usize) -> Vec<u32> {
    let mut weights = vec![0; len];
    if len == 0 {
        return weights;
    }

    let mut left = 0;
    let mut right = len - 1;
    let mut value = len as u32;

    while left <= right {
        weights[left] = value;
        value -= 1;

        if left != right {
            weights[right] = value;
            value -= 1;
        }

        left += 1;
        if right == 0 {
            break;
        }
        right -= 1;
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_inward_spiral() {
        assert_eq!(default_weighting(3), vec![3, 1, 2]);
        assert_eq!(default_weighting(4), vec![4, 2, 1, 3]);
        assert_eq!(default_weighting(6), vec![6, 4, 2, 1, 3, 5]);
        assert_eq!(default_weighting(7), vec![7, 5, 3, 1, 2, 4, 6]);
    }

    #[test]
    fn handles_tiny_lengths() {
        assert!(default_weighting(0).is_empty());
        assert_eq!(default_weighting(1), vec![1]);
        assert_eq!(default_weighting(2), vec![2, 1]);
    }

    #[test]
    fn default_weighting_is_a_permutation() {
        for len in 1..50 {
            let mut weights = default_weighting(len);
            weights.sort_unstable();
            assert_eq!(weights, (1..=len as u32).collect::<Vec<_>>());
        }
    }

    #[test]
    fn resolves_default_by_length() {
        assert_eq!(Weights::Default.resolve(5).unwrap().as_ref(), &[5, 3, 1, 2, 4]);
    }

    #[test]
    fn resolves_custom_independent_of_length() {
        let weights = Weights::custom([4, 2, 1, 3]);
        assert_eq!(weights.resolve(10).unwrap().as_ref(), &[4, 2, 1, 3]);
        assert_eq!(weights.resolve(2).unwrap().as_ref(), &[4, 2, 1, 3]);
    }

    #[test]
    fn rejects_empty_custom_sequence() {
        assert_eq!(
            Weights::Custom(Vec::new()).resolve(3),
            Err(CheckDigitError::EmptyWeightingSequence)
        );
        assert_eq!(
            Weights::Custom(Vec::new()).validate(),
            Err(CheckDigitError::EmptyWeightingSequence)
        );
        assert!(Weights::Default.validate().is_ok());
    }

    #[test]
    fn parses_comma_separated_lists() {
        assert_eq!(
            "7,5,3,1,2,4,6".parse::<Weights>().unwrap(),
            Weights::custom([7, 5, 3, 1, 2, 4, 6])
        );
        assert_eq!(" 4, 2 ,1 ".parse::<Weights>().unwrap(), Weights::custom([4, 2, 1]));
        assert_eq!("default".parse::<Weights>().unwrap(), Weights::Default);
    }

    #[test]
    fn rejects_malformed_lists() {
        assert_eq!("".parse::<Weights>(), Err(CheckDigitError::EmptyWeightingSequence));
        assert_eq!(
            "4,,1".parse::<Weights>(),
            Err(CheckDigitError::InvalidWeight(String::new()))
        );
        assert_eq!(
            "4,-2".parse::<Weights>(),
            Err(CheckDigitError::InvalidWeight("-2".to_string()))
        );
    }

    #[test]
    fn displays_as_parseable_text() {
        let weights = Weights::custom([10, 8, 6]);
        assert_eq!(weights.to_string(), "10,8,6");
        assert_eq!(weights.to_string().parse::<Weights>().unwrap(), weights);
        assert_eq!(Weights::Default.to_string(), "default");
    }
}
