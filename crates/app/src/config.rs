//! Configuration for the enigma-sim application.
//!
//! Handles parsing command-line arguments and resolving them into a machine
//! description plus an input source.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: the classic machine encodes a
//! generated sample message and checks that it decodes again. The seed is
//! printed so runs are reproducible.
//!
//! # Resolution Order
//!
//! The machine starts from `--config` (TOML), else a random key when
//! `--random-key` is given, else the classic machine. `--rotors`,
//! `--reflector`, `--positions`, `--increments` and `--repeat` are then
//! applied on top, in that order.

use clap::Parser;
use enigma_sim_core::{config::RotorConfig, MachineConfig};
use std::path::PathBuf;
use thiserror::Error;

/// Rotor count for generated keys.
const RANDOM_KEY_ROTORS: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "enigma-sim")]
#[command(about = "Rotor cipher machine simulator: encode (and decode) text")]
#[command(version)]
struct Args {
    /// Message to encode (default: generate a sample)
    #[arg(conflicts_with_all = ["input", "interactive"])]
    message: Vec<String>,

    /// Encode a text file line by line
    #[arg(long = "in", value_name = "PATH", conflicts_with = "interactive")]
    input: Option<PathBuf>,

    /// Write the encoded text here instead of stdout
    #[arg(long = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Machine description (TOML)
    #[arg(long, value_name = "PATH", conflicts_with = "random_key")]
    config: Option<PathBuf>,

    /// Generate the machine settings from the seed
    #[arg(long)]
    random_key: bool,

    /// Rotor presets, leftmost first (e.g. I,II,III)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    rotors: Option<Vec<String>>,

    /// Reflector preset (A, B, C) or 26-symbol wiring
    #[arg(long, value_name = "NAME")]
    reflector: Option<String>,

    /// Starting positions 0-25, leftmost first
    #[arg(long, value_delimiter = ',', value_name = "N,N,..")]
    positions: Option<Vec<usize>>,

    /// Step increments 0-25, leftmost first
    #[arg(long, value_delimiter = ',', value_name = "N,N,..")]
    increments: Option<Vec<usize>>,

    /// Forward/backward passes per character
    #[arg(long, value_name = "N")]
    repeat: Option<usize>,

    /// Random seed for keys and sample messages
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Number of words in a generated sample message
    #[arg(long, value_name = "N", default_value_t = 12)]
    sample_words: usize,

    /// Prompt for positions, increments, repeat and message on the console
    #[arg(long)]
    interactive: bool,

    /// Decode the output again and check it matches the input
    #[arg(long)]
    verify: bool,

    /// Print resolved configuration
    #[arg(long)]
    print_config: bool,

    /// Print a one-line result instead of the metrics summary
    #[arg(long)]
    no_metrics: bool,
}

/// Errors while resolving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Command line could not be parsed (includes --help and --version)
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Machine description file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Machine description rejected
    #[error(transparent)]
    Machine(#[from] enigma_sim_core::ConfigError),
}

/// Where the text to encode comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Given on the command line
    Message(String),

    /// Read from a file, one line at a time
    File(PathBuf),

    /// Prompted for on the console
    Interactive,

    /// Generated from the seed
    Sample { words: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Machine to build
    pub machine: MachineConfig,

    /// Text source
    pub input: Input,

    /// Output file path (None = stdout)
    pub output_file: Option<PathBuf>,

    /// Seed used for random keys and sample messages
    pub seed: u64,

    /// Whether to decode the output and compare
    pub verify: bool,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// `args` includes the program name, as returned by `std::env::args`.
    /// If no seed is given a time-based one is used.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let args = Args::try_parse_from(args)?;

        let seed = args.seed.unwrap_or_else(time_seed);

        let mut machine = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                MachineConfig::from_toml_str(&text)?
            }
            None if args.random_key => MachineConfig::random(seed, RANDOM_KEY_ROTORS),
            None => MachineConfig::classic(),
        };

        if let Some(names) = &args.rotors {
            machine.rotors = names.iter().map(|name| RotorConfig::preset(name)).collect();
        }
        if let Some(reflector) = &args.reflector {
            machine.reflector = reflector.clone();
        }
        if let Some(positions) = &args.positions {
            machine.set_positions(positions)?;
        }
        if let Some(increments) = &args.increments {
            machine.set_increments(increments)?;
        }
        if let Some(repeat) = args.repeat {
            machine.repeat = repeat;
        }

        let input = if args.interactive {
            Input::Interactive
        } else if let Some(path) = args.input {
            Input::File(path)
        } else if !args.message.is_empty() {
            Input::Message(args.message.join(" "))
        } else {
            Input::Sample {
                words: args.sample_words,
            }
        };

        // A generated message is only useful if we show it survives a round trip
        let verify = args.verify || matches!(input, Input::Sample { .. });

        Ok(Config {
            machine,
            input,
            output_file: args.output,
            seed,
            verify,
            print_config: args.print_config,
            print_metrics: !args.no_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input {
            Input::Message(_) => println!("Input:  (command line)"),
            Input::File(path) => println!("Input:  {}", path.display()),
            Input::Interactive => println!("Input:  (console)"),
            Input::Sample { words } => println!("Input:  (generated sample, {} words)", words),
        }
        match &self.output_file {
            Some(path) => println!("Output: {}", path.display()),
            None => println!("Output: (stdout)"),
        }
        println!("Seed: {}", self.seed);
        println!();
        println!("=== Machine ===");
        for (i, rotor) in self.machine.rotors.iter().enumerate() {
            let notch = rotor
                .notch
                .map_or_else(|| "preset".to_string(), |c| c.to_string());
            println!(
                "Rotor {}: {:<26}  notch {}  position {:>2}  increment {:>2}",
                i, rotor.wiring, notch, rotor.position, rotor.increment
            );
        }
        println!("Reflector: {}", self.machine.reflector);
        println!("Repeat: {}", self.machine.repeat);
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
