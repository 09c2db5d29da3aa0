use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use log::{debug, info};

use passgen::{GenerationPolicy, PasswordGenerator, PolicyError, DEFAULT_LENGTH};

mod report;

const MIN_COUNT: usize = 1;
const MAX_COUNT: usize = 100;

static EXAMPLES: &str = "\
Examples:
  passgen                    # Generate 12-character password
  passgen -l 16 -s           # Generate 16-character password with special chars
  passgen -l 10 -c 5         # Generate 5 passwords of 10 characters each";

/// Generate random passwords without easily confused characters (0, O, I, l, 1).
#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    help_template = "{usage-heading} {usage}\n\n{all-args}{after-help}",
    disable_help_flag = true,
    args_override_self = true,
    after_help = EXAMPLES
)]
struct Args {
    /// Password length
    #[arg(
        short = 'l',
        value_name = "LENGTH",
        default_value_t = DEFAULT_LENGTH as i64,
        allow_negative_numbers = true
    )]
    length: i64,

    /// Include special characters
    #[arg(short = 's')]
    special: bool,

    /// Number of passwords to generate
    #[arg(
        short = 'c',
        value_name = "COUNT",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    count: i64,

    /// Show this help message
    #[arg(short = 'h', action = ArgAction::Help)]
    help: Option<bool>,
}

/// Check the arguments in the order length bounds, count, then length against `-s`.
fn validate(args: &Args) -> Result<(GenerationPolicy, usize), ProgError> {
    let length = clamp_to_usize(args.length);
    GenerationPolicy::check_length(length)?;
    let count = validate_count(args.count)?;
    let policy = GenerationPolicy::new(length, args.special)?;
    Ok((policy, count))
}

fn run(args: Args) -> Result<(), ProgError> {
    let (policy, count) = validate(&args)?;
    debug!("generating {count} password(s) with {policy:?}");

    let mut generator = PasswordGenerator::new();
    let passwords = (0..count)
        .map(|_| generator.generate(&policy))
        .collect::<Vec<_>>();

    report::write_report(io::stdout().lock(), &policy, &passwords)
        .context("failed to write passwords to standard output")?;
    info!("generated {} password(s)", passwords.len());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => {
                print_usage();
                process::exit(0);
            }
            ErrorKind::ValueValidation => {
                let _ = err.print();
                process::exit(1);
            }
            _ => {
                debug!("rejected arguments: {err}");
                print_usage();
                process::exit(1);
            }
        },
    };

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn print_usage() {
    let help = Args::command().render_help();
    let mut stdout = io::stdout().lock();
    // Nothing sensible left to do if stdout is gone; the exit code still reports the outcome.
    let _ = writeln!(stdout, "{help}").and_then(|()| stdout.flush());
}

/// Negative values are as out of range as zero is.
fn clamp_to_usize(value: i64) -> usize {
    if value < 0 {
        0
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}

fn validate_count(count: i64) -> Result<usize, ProgError> {
    let count = clamp_to_usize(count);
    if count < MIN_COUNT {
        Err(ProgError::CountTooSmall(MIN_COUNT))
    } else if count > MAX_COUNT {
        Err(ProgError::CountTooLarge(MAX_COUNT))
    } else {
        Ok(count)
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error(transparent)]
    Policy(PolicyError),
    #[error("Count must be at least {0}")]
    CountTooSmall(usize),
    #[error("Count cannot exceed {0}")]
    CountTooLarge(usize),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<PolicyError> for ProgError {
    fn from(err: PolicyError) -> ProgError {
        ProgError::Policy(err)
    }
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
