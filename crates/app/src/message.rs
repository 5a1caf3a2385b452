//! Message normalization.
//!
//! The machine only accepts alphabet symbols and spaces. User text is
//! trimmed and upper-cased here, and anything else is rejected before a
//! single rotor moves.

use enigma_sim_core::Alphabet;
use thiserror::Error;

/// Errors in user-supplied text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Character that is neither an alphabet symbol nor a space
    #[error("message contains invalid character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Trim, upper-case and validate `text` for `alphabet`.
pub fn normalize(text: &str, alphabet: &Alphabet) -> Result<String, MessageError> {
    text.trim()
        .chars()
        .enumerate()
        .map(|(index, c)| {
            let upper = c.to_ascii_uppercase();
            if upper == ' ' || alphabet.contains(upper) {
                Ok(upper)
            } else {
                Err(MessageError::InvalidCharacter {
                    character: c,
                    index,
                })
            }
        })
        .collect()
}
