//! Error types for the rotor machine.
//!
//! Construction validates every permutation, notch, position and increment up
//! front, so a machine that was built successfully never fails a lookup in
//! practice. Lookup failures are still reported as structured errors rather
//! than panics.

use thiserror::Error;

/// Top-level error type for all operations in the core.
///
/// Each variant corresponds to a specific failure domain:
/// - Configuration: a malformed wiring, reflector or rotor stack
/// - Lookup: a symbol that is missing from the table it was searched in
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Machine configuration rejected before any encoding began
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// A symbol could not be located in an alphabet, wiring or reflector
    #[error("symbol {symbol:?} not found in {table}")]
    SymbolNotFound { symbol: char, table: &'static str },
}

/// Construction-time configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A symbol appears twice where a permutation is required
    #[error("duplicate symbol {symbol:?} in {context}")]
    DuplicateSymbol { symbol: char, context: &'static str },

    /// Wiring does not contain exactly one entry per alphabet symbol
    #[error("wiring must have {expected} symbols, got {actual}")]
    WiringLength { expected: usize, actual: usize },

    /// Wiring uses a symbol outside the alphabet
    #[error("wiring symbol {symbol:?} is not in the alphabet")]
    UnknownSymbol { symbol: char },

    /// Notch symbol is outside the alphabet
    #[error("notch {notch:?} is not in the alphabet")]
    NotchNotInAlphabet { notch: char },

    /// Custom wiring given without a notch
    #[error("rotor {index} uses a custom wiring and needs an explicit notch")]
    MissingNotch { index: usize },

    /// Rotor position outside [0, max]
    #[error("rotor position {position} is out of range (0 - {max})")]
    PositionOutOfRange { position: usize, max: usize },

    /// Rotor increment outside [0, max]
    #[error("rotor increment {increment} is out of range (0 - {max})")]
    IncrementOutOfRange { increment: usize, max: usize },

    /// A rotor set needs at least one rotor
    #[error("rotor set must contain at least one rotor")]
    NoRotors,

    /// Traversal repeat count must be positive
    #[error("repeat must be at least 1")]
    ZeroRepeat,

    /// Number of supplied positions/increments does not match the rotor count
    #[error("expected {expected} values (one per rotor), got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    /// A preset name that is not known
    #[error("unknown {kind} preset {name:?}")]
    UnknownPreset { kind: &'static str, name: String },

    /// Machine description could not be parsed
    #[error("cannot parse machine description: {0}")]
    Parse(String),
}

/// An encoding run that stopped before the end of the message.
///
/// Holds everything produced up to the failing character so callers can
/// still report or use it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("encoding stopped at character {index}: {source}")]
pub struct PartialEncoding {
    /// Output produced before the failure
    pub output: String,

    /// Index (in characters) of the input character that failed
    pub index: usize,

    /// Underlying failure
    #[source]
    pub source: Error,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_symbol_not_found() {
        let err = Error::SymbolNotFound {
            symbol: '#',
            table: "alphabet",
        };
        assert_eq!(err.to_string(), "symbol '#' not found in alphabet");
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::ZeroRepeat.into();
        assert_eq!(err, Error::InvalidConfiguration(ConfigError::ZeroRepeat));
        assert_eq!(
            err.to_string(),
            "invalid configuration: repeat must be at least 1"
        );
    }

    #[test]
    fn test_display_position_out_of_range() {
        let err = ConfigError::PositionOutOfRange {
            position: 26,
            max: 25,
        };
        assert_eq!(err.to_string(), "rotor position 26 is out of range (0 - 25)");
    }

    #[test]
    fn test_partial_encoding_keeps_output() {
        let err = PartialEncoding {
            output: "BD".to_string(),
            index: 2,
            source: Error::SymbolNotFound {
                symbol: '1',
                table: "alphabet",
            },
        };
        assert_eq!(err.output, "BD");
        assert_eq!(
            err.to_string(),
            "encoding stopped at character 2: symbol '1' not found in alphabet"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
