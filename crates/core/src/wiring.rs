//! Validated permutations of the alphabet.
//!
//! Rotors and reflectors are both described by a wiring: 26 symbols where
//! entry `i` is the symbol that index `i` is wired to. Validation happens here,
//! once, so the hot path never meets a malformed table.

use crate::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::error::ConfigError;

/// A bijection over an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    symbols: [char; ALPHABET_SIZE],
    /// `inverse[j]` is the wiring index holding alphabet symbol `j`.
    inverse: [Option<u8>; ALPHABET_SIZE],
}

impl Wiring {
    /// Parse and validate a wiring string against `alphabet`.
    ///
    /// Fails if the string is not exactly one occurrence of every alphabet
    /// symbol.
    pub fn parse(alphabet: &Alphabet, wiring: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = wiring.chars().collect();
        if chars.len() != ALPHABET_SIZE {
            return Err(ConfigError::WiringLength {
                expected: ALPHABET_SIZE,
                actual: chars.len(),
            });
        }

        let mut symbols = [' '; ALPHABET_SIZE];
        let mut inverse = [None; ALPHABET_SIZE];
        for (i, &symbol) in chars.iter().enumerate() {
            let j = alphabet
                .index_of(symbol)
                .ok_or(ConfigError::UnknownSymbol { symbol })?;
            if inverse[j].is_some() {
                return Err(ConfigError::DuplicateSymbol {
                    symbol,
                    context: "wiring",
                });
            }
            inverse[j] = Some(i as u8);
            symbols[i] = symbol;
        }

        Ok(Self { symbols, inverse })
    }

    /// Symbol wired to `index`.
    ///
    /// # Panics
    /// Panics if `index >= ALPHABET_SIZE`.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Index whose entry is the alphabet symbol at `alphabet_index`.
    pub fn position_of(&self, alphabet_index: usize) -> Option<usize> {
        self.inverse
            .get(alphabet_index)
            .copied()
            .flatten()
            .map(usize::from)
    }

}

impl std::fmt::Display for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
