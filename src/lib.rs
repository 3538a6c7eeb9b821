//! # check-digit
//!
//! Computes, validates and generates identifiers carrying a single
//! alphabetic check character.
//!
//! The check character detects transcription errors: it is derived from a
//! weighted sum over the code points of the payload, reduced modulo 26 and
//! mapped onto `A`..`Z`.
//!
//! ## Quick Start
//!
//! ```
//! use check_digit::{Weights, generate_identifier, is_valid};
//!
//! let id = generate_identifier(8, &Weights::Default).unwrap();
//! assert_eq!(id.len(), 8);
//! assert!(is_valid(&id, &Weights::Default).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`check_digit`] - Check character computation, validation and generation
//! - [`config`] - Identifier length and weighting settings
//! - [`tools`] - Random and deterministic digit sources
//! - [`logging`] - Tracing setup for binaries
//!
//! ## Feature Flags
//!
//! - `pretty_logs` - Colorful console output for development
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `RUST_LOG` | Console log filter (e.g., `info`, `check_digit=debug`) | `info` |

/// Check character engine.
pub mod check_digit;

/// Generator settings.
pub mod config;

/// Logging and tracing infrastructure.
pub mod logging;

/// Digit sources consumed by the engine.
pub mod tools;

pub use check_digit::error::{CheckDigitError, CheckDigitResult};
pub use check_digit::weights::{Weights, default_weighting};
pub use check_digit::{
    CheckDigitEngine, append_check_character, check_character, generate_identifier,
    generate_identifier_with, is_valid, split_check_character,
};
pub use config::{DEFAULT_IDENTIFIER_LENGTH, GeneratorConfig};
