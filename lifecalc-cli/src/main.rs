use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lifecalc_core::calculator::{accumulate, quotient};

use crate::errors::InputError;

mod errors;

const COUNT_PROMPT: &str = "Magic positive number is ";
const RESULT_PROMPT: &str = "The meaning of Life is ";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = exchange(&mut stdin.lock(), &mut stdout.lock());

    if let Err(error) = result {
        debug!(?error, "exchange failed");
        eprintln!("error: {error:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Runs the prompt/read/compute/print exchange over the given streams.
/// The second prompt goes out before the arithmetic, so a division failure
/// still leaves both prompts on the output.
fn exchange(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    write!(output, "{COUNT_PROMPT}")?;
    output.flush()?;

    let count = read_count(input)?;
    debug!(count, "read magic number");

    write!(output, "{RESULT_PROMPT}")?;
    output.flush()?;

    let sum = accumulate(count)?;
    let result = quotient(sum, count)?;
    debug!(sum, result, "computed quotient");

    writeln!(output, "{result}")?;
    Ok(())
}

/// Reads one whitespace-delimited integer token, skipping leading
/// whitespace and newlines.
fn read_count(input: &mut impl BufRead) -> Result<i64> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read standard input")?;

    let token = text.split_whitespace().next().ok_or(InputError::Missing)?;
    let count = token
        .parse()
        .map_err(|_| InputError::Malformed(token.to_owned()))?;

    Ok(count)
}
