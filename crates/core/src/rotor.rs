//! A single substitution wheel.
//!
//! A rotor is a fixed wiring plus a notch symbol, a rotational offset and a
//! step increment. The rotor itself knows nothing about its neighbours: the
//! offset correction between adjacent rotors is applied by
//! [`RotorSet`](crate::rotor_set::RotorSet).

use crate::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::error::{ConfigError, Error, Result};
use crate::wiring::Wiring;

/// Largest valid position or increment.
pub const MAX_SETTING: usize = ALPHABET_SIZE - 1;

/// One rotor of the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    alphabet: Alphabet,
    wiring: Wiring,
    notch: char,
    position: usize,
    increment: usize,
}

impl Rotor {
    /// Create a rotor, validating every setting.
    ///
    /// # Arguments
    /// - `alphabet`: alphabet the wiring is expressed in
    /// - `wiring`: 26-symbol permutation of `alphabet`
    /// - `notch`: symbol that triggers the left neighbour when under the window
    /// - `position`: initial offset in `[0, 25]`
    /// - `increment`: advance per step event in `[0, 25]`
    pub fn new(
        alphabet: &Alphabet,
        wiring: &str,
        notch: char,
        position: usize,
        increment: usize,
    ) -> Result<Self> {
        let wiring = Wiring::parse(alphabet, wiring)?;
        Self::from_wiring(alphabet, wiring, notch, position, increment)
    }

    /// Create a rotor from an already validated wiring.
    pub fn from_wiring(
        alphabet: &Alphabet,
        wiring: Wiring,
        notch: char,
        position: usize,
        increment: usize,
    ) -> Result<Self> {
        if !alphabet.contains(notch) {
            return Err(ConfigError::NotchNotInAlphabet { notch }.into());
        }
        check_position(position)?;
        if increment > MAX_SETTING {
            return Err(ConfigError::IncrementOutOfRange {
                increment,
                max: MAX_SETTING,
            }
            .into());
        }

        Ok(Self {
            alphabet: *alphabet,
            wiring,
            notch,
            position,
            increment,
        })
    }

    /// Signal entering from the right: alphabet index of `wiring[pos]`.
    ///
    /// # Panics
    /// Panics if `pos >= ALPHABET_SIZE`.
    pub fn forward(&self, pos: usize) -> Result<usize> {
        let symbol = self.wiring.symbol(pos);
        self.alphabet
            .index_of(symbol)
            .ok_or(Error::SymbolNotFound {
                symbol,
                table: "alphabet",
            })
    }

    /// Signal entering from the left: the index `i` with
    /// `wiring[i] == alphabet[pos]`.
    ///
    /// # Panics
    /// Panics if `pos >= ALPHABET_SIZE`.
    pub fn backward(&self, pos: usize) -> Result<usize> {
        self.wiring.position_of(pos).ok_or(Error::SymbolNotFound {
            symbol: self.alphabet.symbol(pos),
            table: "rotor wiring",
        })
    }

    /// Advance by this rotor's increment.
    pub fn increment_rotor(&mut self) {
        self.position = (self.position + self.increment) % ALPHABET_SIZE;
    }

    /// True when the symbol under the window is the notch.
    pub fn reached_notch(&self) -> bool {
        self.window() == self.notch
    }

    /// Symbol currently under the window, `wiring[position]`.
    pub fn window(&self) -> char {
        self.wiring.symbol(self.position)
    }

    /// Current rotational offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the rotor to `position` (`[0, 25]`).
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        check_position(position)?;
        self.position = position;
        Ok(())
    }

    /// Positions advanced per step event.
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Symbol that carries into the left neighbour.
    pub fn notch(&self) -> char {
        self.notch
    }

    /// The validated permutation.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Alphabet the wiring is expressed in.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

fn check_position(position: usize) -> Result<()> {
    if position > MAX_SETTING {
        return Err(ConfigError::PositionOutOfRange {
            position,
            max: MAX_SETTING,
        }
        .into());
    }
    Ok(())
}
