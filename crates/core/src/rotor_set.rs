//! The rotor stack: stepping policy and signal traversal.
//!
//! # Stepping
//!
//! [`RotorSet::rotate`] runs once per character, before substitution, in
//! three ordered passes:
//!
//! 1. The rightmost rotor always advances.
//! 2. Every interior rotor (not leftmost, not rightmost) that sits on its
//!    notch advances itself. This is the double-step.
//! 3. Every rotor except the leftmost that sits on its notch advances its
//!    left neighbour. Scanning runs right to left, so a carry into a rotor
//!    is visible to that rotor's own check in the same pass.
//!
//! The passes must stay separate and in this order; output depends on it.
//!
//! # Traversal
//!
//! The forward pass runs right to left through [`Rotor::forward`] and
//! re-expresses the signal in the next rotor's frame after each rotor:
//!
//! ```text
//! pos = (pos - rotors[i].position + rotors[i-1].position) mod N
//! ```
//!
//! The backward pass runs left to right through [`Rotor::backward`] and uses
//! `rotors[i+1]` instead. All arithmetic uses the positive modulo.

use crate::alphabet::{pos_mod, Alphabet};
use crate::error::{ConfigError, Result};
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// What happened during a single [`RotorSet::rotate`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Interior rotors that advanced themselves from their notch
    pub double_steps: usize,

    /// Rotors that advanced their left neighbour
    pub carries: usize,
}

/// An ordered, non-empty stack of rotors plus a reflector.
///
/// Index 0 is the leftmost rotor (slowest, next to the reflector); the last
/// index is the rightmost rotor (fastest, next to the input).
///
/// # Thread Safety
/// Rotor positions mutate on every character. Encode independent messages
/// with independent (cloned) sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSet {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    repeat: usize,
}

impl RotorSet {
    /// Assemble a rotor set.
    ///
    /// Fails if `rotors` is empty or `repeat` is zero.
    pub fn new(rotors: Vec<Rotor>, reflector: Reflector, repeat: usize) -> Result<Self> {
        if rotors.is_empty() {
            return Err(ConfigError::NoRotors.into());
        }
        if repeat == 0 {
            return Err(ConfigError::ZeroRepeat.into());
        }

        Ok(Self {
            rotors,
            reflector,
            repeat,
        })
    }

    /// Step the machine once. See the module docs for the exact order.
    pub fn rotate(&mut self) -> StepEvents {
        let last = self.last();
        let mut events = StepEvents::default();

        self.rotors[last].increment_rotor();

        for i in (1..last).rev() {
            if self.rotors[i].reached_notch() {
                self.rotors[i].increment_rotor();
                events.double_steps += 1;
            }
        }

        for i in (1..=last).rev() {
            if self.rotors[i].reached_notch() {
                self.rotors[i - 1].increment_rotor();
                events.carries += 1;
            }
        }

        events
    }

    /// Pass the signal right to left through every rotor.
    pub fn traverse_forward(&self, mut pos: usize) -> Result<usize> {
        for i in (0..self.rotors.len()).rev() {
            let rotor = &self.rotors[i];
            pos = rotor.forward(pos)?;

            if i != 0 {
                pos = pos_mod(
                    pos as isize - rotor.position() as isize
                        + self.rotors[i - 1].position() as isize,
                );
            }
        }

        Ok(pos)
    }

    /// Pass the signal left to right through every rotor.
    pub fn traverse_backward(&self, mut pos: usize) -> Result<usize> {
        let last = self.last();
        for (i, rotor) in self.rotors.iter().enumerate() {
            pos = rotor.backward(pos)?;

            if i != last {
                pos = pos_mod(
                    pos as isize - rotor.position() as isize
                        + self.rotors[i + 1].position() as isize,
                );
            }
        }

        Ok(pos)
    }

    /// Apply the reflector.
    pub fn reflect(&self, pos: usize) -> Result<usize> {
        self.reflector.reflect(pos)
    }

    /// Current position of every rotor, leftmost first.
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Move every rotor, leftmost first.
    ///
    /// All values are checked before any rotor moves.
    pub fn set_positions(&mut self, positions: &[usize]) -> Result<()> {
        if positions.len() != self.rotors.len() {
            return Err(ConfigError::CountMismatch {
                expected: self.rotors.len(),
                actual: positions.len(),
            }
            .into());
        }
        let mut staged = self.rotors.clone();
        for (rotor, &position) in staged.iter_mut().zip(positions) {
            rotor.set_position(position)?;
        }
        self.rotors = staged;
        Ok(())
    }

    /// Symbols under the rotor windows, leftmost first.
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Offset of the rightmost rotor, applied on entry and removed on exit.
    pub fn entry_offset(&self) -> usize {
        self.rotors[self.last()].position()
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.reflector.alphabet()
    }

    /// Number of rotors (never zero).
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Always false: construction rejects an empty stack.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    fn last(&self) -> usize {
        self.rotors.len() - 1
    }
}
