use anyhow::Context;
use check_digit::{CheckDigitEngine, DEFAULT_IDENTIFIER_LENGTH, GeneratorConfig, Weights};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Generates and verifies identifiers carrying an alphabetic check character.
#[derive(Parser)]
#[command(name = "check-digit", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generates random numeric identifiers ending in their check character.
    Generate {
        /// Total length including the check character.
        #[arg(short, long, default_value_t = DEFAULT_IDENTIFIER_LENGTH)]
        length: usize,
        /// Comma separated weighting sequence, e.g. `7,5,3,1,2,4,6`.
        #[arg(short, long)]
        weights: Option<String>,
        /// Number of identifiers to print.
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Prints the check character of the given input.
    Check {
        input: String,
        #[arg(short, long)]
        weights: Option<String>,
    },
    /// Verifies the trailing check character of the given identifier.
    Validate {
        input: String,
        #[arg(short, long)]
        weights: Option<String>,
    },
}

fn parse_weights(weights: Option<&str>) -> anyhow::Result<Weights> {
    match weights {
        Some(weights) => weights
            .parse()
            .with_context(|| format!("Cannot parse weighting sequence '{}'", weights)),
        None => Ok(Weights::Default),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Generate {
            length,
            weights,
            count,
        } => {
            let config = GeneratorConfig::default()
                .with_length(length)
                .with_weights(parse_weights(weights.as_deref())?);
            let mut engine = CheckDigitEngine::random(config);

            for _ in 0..count {
                println!("{}", engine.generate().context("Cannot generate identifier")?);
            }
            tracing::debug!(count, length, "Generated identifiers");

            Ok(ExitCode::SUCCESS)
        }
        Command::Check { input, weights } => {
            let weights = parse_weights(weights.as_deref())?;
            let check = check_digit::check_character(&input, &weights)
                .with_context(|| format!("Cannot compute check character of '{}'", input))?;
            println!("{}", check);

            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { input, weights } => {
            let weights = parse_weights(weights.as_deref())?;
            let valid = check_digit::is_valid(&input, &weights)
                .with_context(|| format!("Cannot validate '{}'", input))?;

            if valid {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                tracing::info!("'{}' does not end in its check character", input);
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn exit_code(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    check_digit::logging::setup_tracing();
    exit_code(run(Cli::parse()))
}
