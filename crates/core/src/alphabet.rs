//! The fixed 26-symbol alphabet and positional arithmetic.
//!
//! Every index used by the machine is a position in [`Alphabet::LATIN`]. It
//! is a compile-time constant handed to the rotor and reflector constructors.
//! Symbol to index lookups go through a reverse table built with it, so they
//! cost O(1) instead of a scan.

/// Number of symbols in every alphabet, wiring and reflector.
pub const ALPHABET_SIZE: usize = 26;

/// Size of the reverse lookup table (ASCII range).
const LOOKUP_SIZE: usize = 128;

/// The immutable ordered set of 26 symbols the machine works over.
///
/// The only instance is [`Alphabet::LATIN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; ALPHABET_SIZE],
    lookup: [Option<u8>; LOOKUP_SIZE],
}

impl Alphabet {
    /// The Latin capital letters `A..=Z`.
    pub const LATIN: Alphabet = Alphabet::latin();

    const fn latin() -> Self {
        let mut symbols = ['A'; ALPHABET_SIZE];
        let mut lookup = [None; LOOKUP_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let byte = b'A' + i as u8;
            symbols[i] = byte as char;
            lookup[byte as usize] = Some(i as u8);
            i += 1;
        }
        Self { symbols, lookup }
    }

    /// Number of symbols (always [`ALPHABET_SIZE`]).
    pub const fn len(&self) -> usize {
        ALPHABET_SIZE
    }

    /// Always false; present for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of `symbol`, or `None` if it is not part of the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        self.lookup[symbol as usize].map(usize::from)
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= ALPHABET_SIZE`.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// The symbols in canonical order.
    pub fn symbols(&self) -> &[char; ALPHABET_SIZE] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LATIN
    }
}

/// Modulo that never returns a negative result: always in `[0, ALPHABET_SIZE)`.
///
/// Offset corrections routinely go negative, so this must not be replaced by
/// the truncating `%`.
pub fn pos_mod(value: isize) -> usize {
    value.rem_euclid(ALPHABET_SIZE as isize) as usize
}
