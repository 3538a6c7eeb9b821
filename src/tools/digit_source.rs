//! Sources of decimal digits for identifier payloads.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Produces decimal digit characters (`'0'..='9'`).
///
/// The engine consumes this as a capability so that tests and tools can
/// substitute a deterministic source for the random one.
pub trait DigitSource {
    /// Returns the next digit character.
    fn next_digit(&mut self) -> char;

    /// Collects `count` digits into a string.
    fn digits(&mut self, count: usize) -> String {
        let mut result = String::with_capacity(count);
        for _ in 0..count {
            result.push(self.next_digit());
        }

        result
    }
}

/// Draws every digit independently and uniformly from all ten decimal digits.
pub struct RandomDigits<R> {
    rng: R,
}

impl<R: Rng> RandomDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDigits<ThreadRng> {
    /// Uses the lazily seeded generator of the calling thread.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digit(&mut self) -> char {
        char::from(b'0' + self.rng.random_range(0..=9u8))
    }
}

/// Replays a fixed digit string, starting over once it is exhausted.
#[derive(Clone, Debug)]
pub struct FixedDigits {
    digits: Vec<char>,
    position: usize,
}

impl FixedDigits {
    /// Creates a source replaying the decimal digits of `digits`.
    ///
    /// Any other characters are skipped. Returns `None` if `digits` holds no
    /// decimal digit at all.
    pub fn new(digits: &str) -> Option<Self> {
        let digits: Vec<char> = digits.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }

        Some(Self {
            digits,
            position: 0,
        })
    }
}

impl DigitSource for FixedDigits {
    fn next_digit(&mut self) -> char {
        let digit = self.digits[self.position];
        self.position = (self.position + 1) % self.digits.len();

        digit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn produces_requested_number_of_digits() {
        let digits = RandomDigits::thread_local().digits(64);
        assert_eq!(digits.len(), 64);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn reaches_every_decimal_digit() {
        let digits = RandomDigits::new(StdRng::seed_from_u64(42)).digits(2000);
        for digit in '0'..='9' {
            assert!(digits.contains(digit), "digit {digit} was never drawn");
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let first = RandomDigits::new(StdRng::seed_from_u64(7)).digits(16);
        let second = RandomDigits::new(StdRng::seed_from_u64(7)).digits(16);
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_digits_wrap_around() {
        let mut source = FixedDigits::new("123").unwrap();
        assert_eq!(source.digits(7), "1231231");
    }

    #[test]
    fn fixed_digits_skip_non_digits() {
        assert_eq!(FixedDigits::new("4-2").unwrap().digits(3), "424");
    }

    #[test]
    fn fixed_digits_require_at_least_one_digit() {
        assert!(FixedDigits::new("").is_none());
        assert!(FixedDigits::new("abc-").is_none());
    }
}
