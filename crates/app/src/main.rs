//! enigma-sim: rotor cipher machine simulator.
//!
//! Thin front end over `enigma_sim_core`: resolves the configuration, reads
//! the text, normalizes it, runs one encoding session and prints the result.

mod config;
mod input_gen;
mod message;
mod prompt;

use anyhow::{bail, Context, Result};
use config::{Config, ConfigError, Input};
use enigma_sim_core::{Alphabet, Encoder, RotorSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(ConfigError::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(mut config: Config) -> Result<()> {
    // Interactive answers change the machine, so they come before building it
    let lines = match &config.input {
        Input::Interactive => {
            let stdin = io::stdin();
            let text = prompt::run_session(&mut config.machine, stdin.lock(), io::stdout())
                .context("reading settings from console")?;
            vec![text]
        }
        Input::Message(text) => vec![text.clone()],
        Input::Sample { words } => vec![input_gen::generate_sample_message(config.seed, *words)],
        Input::File(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            BufReader::new(file)
                .lines()
                .collect::<io::Result<Vec<_>>>()
                .with_context(|| format!("reading {}", path.display()))?
        }
    };

    let rotor_set = config.machine.build().context("building machine")?;

    if config.print_config {
        config.print();
    }
    if !rotor_set.reflector().is_involution() {
        eprintln!("Warning: reflector is not an involution; decoding will not restore the input");
    }

    let plain = normalize_lines(&lines, rotor_set.alphabet())?;
    if let Input::Sample { .. } = config.input {
        println!("Sample message: {}", plain.join("\n"));
    }

    let mut encoder = Encoder::new(rotor_set.clone());
    let encoded = encode_lines(&mut encoder, &plain)?;

    match &config.output_file {
        Some(path) => {
            let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            for line in &encoded {
                writeln!(file, "{}", line)?;
            }
            println!("Wrote {} line(s) to {}", encoded.len(), path.display());
        }
        None if encoded.len() == 1 => println!("Encoded message: {}", encoded[0]),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in &encoded {
                writeln!(out, "{}", line)?;
            }
        }
    }

    let (_, metrics) = encoder.finish();

    if config.verify {
        verify(&rotor_set, &plain, &encoded)?;
    }

    if config.print_metrics {
        metrics.print_summary();
    } else {
        metrics.print_result();
    }

    Ok(())
}

/// Normalize every line, naming the line number on failure.
fn normalize_lines(lines: &[String], alphabet: &Alphabet) -> Result<Vec<String>> {
    lines
        .iter()
        .enumerate()
        .map(|(n, line)| {
            message::normalize(line, alphabet).with_context(|| format!("line {}", n + 1))
        })
        .collect()
}

/// Encode lines in order within one session.
///
/// Rotor state carries over from line to line. On failure the partial
/// output of the failing line is reported.
fn encode_lines(encoder: &mut Encoder, lines: &[String]) -> Result<Vec<String>> {
    let mut encoded = Vec::with_capacity(lines.len());
    for (n, line) in lines.iter().enumerate() {
        match encoder.encode(line) {
            Ok(text) => encoded.push(text),
            Err(partial) => {
                eprintln!("Partial output: {}", partial.output);
                return Err(partial).with_context(|| format!("line {}", n + 1));
            }
        }
    }
    Ok(encoded)
}

/// Decode `encoded` from the starting state and compare with `plain`.
fn verify(start: &RotorSet, plain: &[String], encoded: &[String]) -> Result<()> {
    let mut decoder = Encoder::new(start.clone());
    let decoded = encode_lines(&mut decoder, encoded)?;

    if decoded == plain {
        println!("Verification: PASSED ✓");
        Ok(())
    } else {
        println!("Verification: FAILED ✗");
        bail!("decoded text does not match the input")
    }
}
