//! Computes, appends and validates alphabetic check characters.
//!
//! The check character of a payload is `'A' + (sum mod 26)` where `sum` adds
//! up the code point of every payload character multiplied by its weight.
//! Weights are taken cyclically from a [`Weights`] sequence, so a short
//! sequence starts over from its first weight and the tail of a long one is
//! left unused.
//!
//! ```
//! use check_digit::{Weights, check_character, is_valid};
//!
//! let check = check_character("ABC4321", &Weights::custom([7, 5, 3, 1, 2, 4, 6])).unwrap();
//! assert_eq!(check, 'W');
//! assert!(is_valid("ABC4321W", &Weights::Default).unwrap());
//! ```
//!
//! This is a transcription checksum, not a hash: it offers no protection
//! against deliberate tampering.

use crate::config::GeneratorConfig;
use crate::tools::digit_source::{DigitSource, RandomDigits};

pub mod error;
pub mod weights;

use error::{CheckDigitError, CheckDigitResult};
use weights::Weights;

const ALPHABET_SIZE: u64 = 26;

/// Computes the check character of `input`.
///
/// Fails for an empty input or an empty custom weighting sequence.
pub fn check_character(input: &str, weights: &Weights) -> CheckDigitResult<char> {
    if input.is_empty() {
        return Err(CheckDigitError::InvalidInput(
            "cannot compute a check character for an empty string".to_string(),
        ));
    }

    let chars = input.chars().count();
    let weights = weights.resolve(chars)?;

    // Keeping a running residue is congruent to reducing the full sum once
    // and cannot overflow: each term is below 2^21 * 2^32.
    let residue = input
        .chars()
        .zip(weights.iter().cycle())
        .fold(0u64, |residue, (ch, weight)| {
            (residue + u64::from(u32::from(ch)) * u64::from(*weight)) % ALPHABET_SIZE
        });

    let check = char::from(b'A' + residue as u8);
    tracing::debug!(chars, %check, "Computed check character");

    Ok(check)
}

/// Returns `payload` followed by its check character.
pub fn append_check_character(payload: &str, weights: &Weights) -> CheckDigitResult<String> {
    let check = check_character(payload, weights)?;

    let mut result = String::with_capacity(payload.len() + 1);
    result.push_str(payload);
    result.push(check);

    Ok(result)
}

/// Splits an identifier into its payload and its trailing check character.
///
/// Requires at least one payload character in front of the check character.
pub fn split_check_character(input: &str) -> CheckDigitResult<(&str, char)> {
    let mut chars = input.char_indices();
    match (chars.next_back(), input.chars().nth(1)) {
        (Some((index, check)), Some(_)) => Ok((&input[..index], check)),
        _ => Err(CheckDigitError::InvalidInput(format!(
            "'{}' is too short to carry a payload and a check character",
            input
        ))),
    }
}

/// Determines if the last character of `input` is the check character of
/// everything in front of it.
///
/// Default weights are derived from the payload length, not from the length
/// of `input`.
pub fn is_valid(input: &str, weights: &Weights) -> CheckDigitResult<bool> {
    let (payload, provided) = split_check_character(input)?;
    let expected = check_character(payload, weights)?;

    if provided != expected {
        tracing::debug!(%provided, %expected, "Check character mismatch");
    }

    Ok(provided == expected)
}

/// Generates a random numeric identifier of `length` characters, the last
/// one being its check character.
///
/// Every call draws from the random generator of the calling thread.
pub fn generate_identifier(length: usize, weights: &Weights) -> CheckDigitResult<String> {
    generate_identifier_with(&mut RandomDigits::thread_local(), length, weights)
}

/// Like [`generate_identifier`] but draws the payload from the given source.
pub fn generate_identifier_with<S: DigitSource + ?Sized>(
    source: &mut S,
    length: usize,
    weights: &Weights,
) -> CheckDigitResult<String> {
    if length < 2 {
        return Err(CheckDigitError::InvalidLength(length));
    }
    weights.validate()?;

    let payload = source.digits(length - 1);
    append_check_character(&payload, weights)
}

/// Generates identifiers from an owned digit source using a fixed
/// [`GeneratorConfig`].
///
/// ```
/// use check_digit::{CheckDigitEngine, GeneratorConfig};
/// use check_digit::tools::digit_source::FixedDigits;
///
/// let mut engine = CheckDigitEngine::new(FixedDigits::new("123").unwrap(), GeneratorConfig::default().with_length(4));
/// assert_eq!(engine.generate().unwrap(), "123N");
/// ```
pub struct CheckDigitEngine<S> {
    source: S,
    config: GeneratorConfig,
}

impl CheckDigitEngine<RandomDigits<rand::rngs::ThreadRng>> {
    /// Creates an engine drawing from the random generator of the current
    /// thread.
    pub fn random(config: GeneratorConfig) -> Self {
        Self::new(RandomDigits::thread_local(), config)
    }
}

impl<S: DigitSource> CheckDigitEngine<S> {
    /// Creates an engine drawing payload digits from `source`.
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    /// Returns the settings used by [`CheckDigitEngine::generate`].
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates an identifier with the configured length and weights.
    pub fn generate(&mut self) -> CheckDigitResult<String> {
        self.config.validate()?;
        generate_identifier_with(&mut self.source, self.config.length, &self.config.weights)
    }

    /// Generates an identifier with the configured weights but another length.
    pub fn generate_with_length(&mut self, length: usize) -> CheckDigitResult<String> {
        generate_identifier_with(&mut self.source, length, &self.config.weights)
    }

    /// Computes the check character of `input` with the configured weights.
    pub fn check_character(&self, input: &str) -> CheckDigitResult<char> {
        check_character(input, &self.config.weights)
    }

    /// Validates `input` with the configured weights.
    pub fn is_valid(&self, input: &str) -> CheckDigitResult<bool> {
        is_valid(input, &self.config.weights)
    }
}
