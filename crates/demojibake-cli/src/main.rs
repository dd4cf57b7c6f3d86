//! Command-line front end: argument handling, existence checks, progress.
//!
//! All repair behavior lives in the `demojibake` library; this binary only
//! wires files to the pipeline and prints progress.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use demojibake::{
    DEFAULT_GUESSED_CONTINUATION, DEFAULT_WINDOW_CAPACITY, RepairOptions, RepairPipeline,
};

/// Repair UTF-8 text damaged by a lossy 8-bit transcoding pass.
///
/// An earlier conversion through a single-byte charset replaced the
/// continuation bytes it could not represent with `?`. This tool streams the
/// file once, substitutes a guessed continuation byte where a sequence is
/// repairable, and blanks irrecoverable sequences with `.`.
#[derive(Debug, Parser)]
#[command(name = "demojibake", version)]
struct Cli {
    /// Damaged input file.
    input: PathBuf,

    /// Repaired output file (created or truncated).
    output: PathBuf,

    /// Replacement for a damaged continuation byte, decimal or 0x-prefixed
    /// hex; must lie in 0x80..=0xBF. The default suits CP1251-damaged
    /// Cyrillic text.
    #[arg(long, value_parser = parse_guess, default_value_t = DEFAULT_GUESSED_CONTINUATION)]
    guess: u8,

    /// Processing window size in bytes (minimum 4).
    #[arg(long, value_parser = parse_window, default_value_t = DEFAULT_WINDOW_CAPACITY)]
    window: usize,
}

fn parse_guess(arg: &str) -> Result<u8, String> {
    let value = match arg.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => arg.parse(),
    }
    .map_err(|err| err.to_string())?;
    if matches!(value, 0x80..=0xBF) {
        Ok(value)
    } else {
        Err(String::from(
            "must be a UTF-8 continuation byte (0x80..=0xBF)",
        ))
    }
}

fn parse_window(arg: &str) -> Result<usize, String> {
    let value: usize = arg.parse().map_err(|err: std::num::ParseIntError| err.to_string())?;
    if value >= 4 {
        Ok(value)
    } else {
        Err(String::from("window must be at least 4 bytes"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("input file `{}` was not found", cli.input.display());
    }
    let total = std::fs::metadata(&cli.input)
        .with_context(|| format!("cannot stat `{}`", cli.input.display()))?
        .len();

    eprintln!("Input file: `{}`", cli.input.display());
    eprintln!("Output file: `{}`", cli.output.display());

    let reader = File::open(&cli.input)
        .with_context(|| format!("cannot open `{}`", cli.input.display()))?;
    let writer = BufWriter::new(
        File::create(&cli.output)
            .with_context(|| format!("cannot create `{}`", cli.output.display()))?,
    );

    let pipeline = RepairPipeline::new(RepairOptions {
        guessed_continuation: cli.guess,
        window_capacity: cli.window,
    });
    let stats = pipeline.run_with_progress(reader, writer, |stats| {
        eprint!(
            "\rProcessed {} of {} bytes, replaced {} bytes.",
            group_digits(stats.bytes_emitted),
            group_digits(total),
            group_digits(stats.bytes_overwritten),
        );
        let _ = std::io::stderr().flush();
    })?;

    eprintln!();
    eprintln!(
        "Done: {} bytes processed, {} bytes replaced.",
        group_digits(stats.bytes_emitted),
        group_digits(stats.bytes_overwritten),
    );
    Ok(())
}

/// Formats `value` with a comma every three digits.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::{Cli, group_digits, parse_guess, parse_window};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn guess_accepts_hex_and_decimal_continuations() {
        assert_eq!(parse_guess("0x98"), Ok(0x98));
        assert_eq!(parse_guess("152"), Ok(0x98));
        assert!(parse_guess("0x41").is_err());
        assert!(parse_guess("banana").is_err());
    }

    #[test]
    fn window_enforces_the_minimum() {
        assert_eq!(parse_window("4"), Ok(4));
        assert!(parse_window("3").is_err());
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(5_000_000), "5,000,000");
    }
}
