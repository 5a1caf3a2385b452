//! Metrics collection and reporting for encoding sessions.
//!
//! This module provides observable insights into machine behavior:
//! - Throughput (characters in/out)
//! - Stepping activity (rotations, double-steps, carries)
//! - Signal work (rotor passes)
//! - Timing information
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. Each encoding session owns its
//! own instance, the same way it owns its own rotor set.

use crate::rotor_set::StepEvents;
use std::time::{Duration, Instant};

/// Counters for one encoding session.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the session started
    pub start_time: Instant,

    /// When the session ended (set on completion)
    pub end_time: Option<Instant>,

    // === Characters ===
    /// Characters handed to the encoder
    pub characters_in: u64,

    /// Characters substituted through the rotors
    pub characters_encoded: u64,

    /// Spaces passed through unchanged
    pub spaces_passed: u64,

    // === Stepping ===
    /// Calls to `rotate`
    pub rotations: u64,

    /// Interior rotors that advanced themselves from their notch
    pub double_steps: u64,

    /// Notch carries into a left neighbour
    pub carries: u64,

    // === Signal ===
    /// Single-rotor substitutions performed (both directions)
    pub rotor_passes: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            characters_in: 0,
            characters_encoded: 0,
            spaces_passed: 0,
            rotations: 0,
            double_steps: 0,
            carries: 0,
            rotor_passes: 0,
        }
    }

    /// Record the outcome of one `rotate` call.
    pub fn record_step(&mut self, events: StepEvents) {
        self.rotations += 1;
        self.double_steps += events.double_steps as u64;
        self.carries += events.carries as u64;
    }

    /// Mark the session as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compute throughput in characters/second.
    pub fn throughput_cps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.characters_in as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Session Summary ===");
        println!("Duration: {} µs", self.duration().as_micros());
        println!();

        println!("=== Characters ===");
        println!("Input:        {}", self.characters_in);
        println!("Substituted:  {}", self.characters_encoded);
        println!("Passed (spc): {}", self.spaces_passed);
        println!();

        println!("=== Stepping ===");
        println!("Rotations:    {}", self.rotations);
        println!("Double-steps: {}", self.double_steps);
        println!("Carries:      {}", self.carries);
        println!();

        println!("=== Signal ===");
        println!("Rotor passes: {}", self.rotor_passes);
        println!("Throughput:   {:.0} chars/s", self.throughput_cps());
        println!();
    }

    /// Print a one-line outcome of the session to stdout.
    pub fn print_result(&self) {
        println!("{}", self.result_line());
    }

    /// Outcome line printed by [`print_result`](Self::print_result).
    pub fn result_line(&self) -> String {
        let handled = self.characters_encoded + self.spaces_passed;
        if handled == self.characters_in {
            format!(
                "✓ Session completed: {} characters in {} µs",
                self.characters_in,
                self.duration().as_micros()
            )
        } else {
            format!(
                "✗ Session stopped after {} of {} characters",
                handled, self.characters_in
            )
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_us={}\n\
             characters_in={}\n\
             characters_encoded={}\n\
             spaces_passed={}\n\
             rotations={}\n\
             double_steps={}\n\
             carries={}\n\
             rotor_passes={}\n",
            self.duration().as_micros(),
            self.characters_in,
            self.characters_encoded,
            self.spaces_passed,
            self.rotations,
            self.double_steps,
            self.carries,
            self.rotor_passes,
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
