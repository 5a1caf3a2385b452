//! Per-character encoding pipeline.
//!
//! For every input character the encoder:
//!
//! 1. steps the rotor set (always, even for spaces)
//! 2. passes spaces through unchanged
//! 3. enters the signal through the rightmost rotor's current offset
//! 4. runs the forward pass `repeat` times
//! 5. reflects once
//! 6. runs the backward pass `repeat` times
//! 7. removes the rightmost rotor's offset again
//!
//! With a reflector that is an involution the whole transform is its own
//! inverse: encoding the output again from the same starting state gives back
//! the input.

use crate::alphabet::pos_mod;
use crate::error::{Error, PartialEncoding, Result};
use crate::metrics::Metrics;
use crate::rotor_set::RotorSet;

/// An encoding session over one rotor set.
#[derive(Debug, Clone)]
pub struct Encoder {
    rotor_set: RotorSet,
    initial: RotorSet,
    metrics: Metrics,
}

impl Encoder {
    /// Start a session from the rotor set's current state.
    pub fn new(rotor_set: RotorSet) -> Self {
        Self {
            initial: rotor_set.clone(),
            rotor_set,
            metrics: Metrics::new(),
        }
    }

    /// Encode a whole message.
    ///
    /// Every non-space character must belong to the alphabet. On the first
    /// failure the characters produced so far are returned inside the error.
    /// The rotor state stays wherever the failing character left it.
    pub fn encode(&mut self, message: &str) -> std::result::Result<String, PartialEncoding> {
        let mut output = String::with_capacity(message.len());

        for (index, c) in message.chars().enumerate() {
            match self.encode_char(c) {
                Ok(encoded) => output.push(encoded),
                Err(source) => {
                    self.metrics.complete();
                    return Err(PartialEncoding {
                        output,
                        index,
                        source,
                    });
                }
            }
        }

        self.metrics.complete();
        Ok(output)
    }

    /// Step the machine and encode one character.
    pub fn encode_char(&mut self, c: char) -> Result<char> {
        let events = self.rotor_set.rotate();
        self.metrics.record_step(events);
        self.metrics.characters_in += 1;

        if c == ' ' {
            self.metrics.spaces_passed += 1;
            return Ok(' ');
        }

        let set = &self.rotor_set;
        let index = set.alphabet().index_of(c).ok_or(Error::SymbolNotFound {
            symbol: c,
            table: "alphabet",
        })?;

        let offset = set.entry_offset() as isize;
        let mut pos = pos_mod(index as isize + offset);

        for _ in 0..set.repeat() {
            pos = set.traverse_forward(pos)?;
        }

        pos = set.reflect(pos)?;

        for _ in 0..set.repeat() {
            pos = set.traverse_backward(pos)?;
        }

        pos = pos_mod(pos as isize - offset);

        self.metrics.characters_encoded += 1;
        self.metrics.rotor_passes += (2 * set.repeat() * set.len()) as u64;

        Ok(set.alphabet().symbol(pos))
    }

    /// Return the rotors to the state the session started from.
    ///
    /// Metrics keep accumulating.
    pub fn reset(&mut self) {
        self.rotor_set = self.initial.clone();
    }

    pub fn rotor_set(&self) -> &RotorSet {
        &self.rotor_set
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// End the session, returning the final rotor state and its metrics.
    pub fn finish(mut self) -> (RotorSet, Metrics) {
        self.metrics.complete();
        (self.rotor_set, self.metrics)
    }
}
