//! The fixed reflecting wheel between the forward and backward passes.

use crate::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::error::{Error, Result};
use crate::wiring::Wiring;

/// A fixed permutation applied once per character.
///
/// Historical reflectors are involutions without fixed points. That is not
/// enforced here; use [`is_involution`](Self::is_involution) to check, since
/// the encode/decode symmetry only holds for involutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    alphabet: Alphabet,
    wiring: Wiring,
}

impl Reflector {
    /// Create a reflector from a 26-symbol permutation of `alphabet`.
    pub fn new(alphabet: &Alphabet, wiring: &str) -> Result<Self> {
        let wiring = Wiring::parse(alphabet, wiring)?;
        Ok(Self {
            alphabet: *alphabet,
            wiring,
        })
    }

    /// Alphabet index of `reflector[pos]`.
    ///
    /// # Panics
    /// Panics if `pos >= ALPHABET_SIZE`.
    pub fn reflect(&self, pos: usize) -> Result<usize> {
        let symbol = self.wiring.symbol(pos);
        self.alphabet.index_of(symbol).ok_or(Error::SymbolNotFound {
            symbol,
            table: "reflector",
        })
    }

    /// True if reflecting twice always returns the starting index.
    pub fn is_involution(&self) -> bool {
        (0..ALPHABET_SIZE)
            .all(|pos| self.reflect(pos).and_then(|out| self.reflect(out)) == Ok(pos))
    }

    /// Indices that reflect onto themselves.
    pub fn fixed_points(&self) -> Vec<usize> {
        (0..ALPHABET_SIZE)
            .filter(|&pos| self.reflect(pos) == Ok(pos))
            .collect()
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_reflect() {
        let reflector = Reflector::new(&Alphabet::LATIN, REFLECTOR_B).unwrap();
        // A -> Y
        assert_eq!(reflector.reflect(0), Ok(24));
        // Y -> A
        assert_eq!(reflector.reflect(24), Ok(0));
    }

    #[test]
    fn test_reflector_b_is_involution() {
        let reflector = Reflector::new(&Alphabet::LATIN, REFLECTOR_B).unwrap();
        assert!(reflector.is_involution());
        assert!(reflector.fixed_points().is_empty());
    }

    #[test]
    fn test_non_involution_detected() {
        // A rotor wiring is a permutation but not an involution
        let reflector = Reflector::new(&Alphabet::LATIN, "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert!(!reflector.is_involution());
    }

    #[test]
    fn test_identity_has_fixed_points() {
        let reflector = Reflector::new(&Alphabet::LATIN, "ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(reflector.is_involution());
        assert_eq!(reflector.fixed_points().len(), 26);
    }

    #[test]
    fn test_invalid_reflector() {
        assert!(matches!(
            Reflector::new(&Alphabet::LATIN, "YRUHQSLDPXNGOKMIEBFZCWVJAA"),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
