//! enigma-sim-core: rotor cipher machine simulator
//!
//! This library models an electromechanical rotor cipher machine of the
//! Enigma family:
//! - A stack of rotating substitution rotors with notch-driven stepping
//! - A reflector between the forward and backward signal passes
//! - Non-historical generalizations: per-rotor step increments and a
//!   repeat count for the number of passes per character
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `alphabet`: the 26-symbol alphabet and positive modulo
//! - `wiring`: validated permutations
//! - `rotor`: a single wheel (wiring, notch, position, increment)
//! - `reflector`: the reflecting wheel
//! - `rotor_set`: stepping policy and signal traversal
//! - `encoder`: the per-character pipeline
//! - `presets`: historical wirings
//! - `config`: machine descriptions (TOML, seeded random keys)
//! - `metrics`: observable session behavior
//!
//! # Example
//!
//! ```
//! use enigma_sim_core::{Encoder, MachineConfig};
//!
//! let mut encoder = Encoder::new(MachineConfig::classic().build().unwrap());
//! let secret = encoder.encode("HELLO WORLD").unwrap();
//! assert_eq!(secret, "ILBDA QQDPC");
//!
//! // Same starting state decodes
//! encoder.reset();
//! assert_eq!(encoder.encode(&secret).unwrap(), "HELLO WORLD");
//! ```
//!
//! # Design Principles
//!
//! - **Validate once**: every table is checked at construction
//! - **No panics**: lookups return structured errors
//! - **Deterministic**: identical state and input give identical output
//! - **No global state**: each session owns its rotor set

pub mod alphabet;
pub mod config;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod presets;
pub mod reflector;
pub mod rotor;
pub mod rotor_set;
pub mod wiring;

// Re-export commonly used types
pub use alphabet::{Alphabet, ALPHABET_SIZE};
pub use config::{MachineConfig, RotorConfig};
pub use encoder::Encoder;
pub use error::{ConfigError, Error, PartialEncoding, Result};
pub use metrics::Metrics;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use rotor_set::{RotorSet, StepEvents};
