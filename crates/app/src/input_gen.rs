//! Sample message generation for demo runs.
//!
//! When no message is given, we generate one from a seed so the run still
//! exercises the whole machine: a mix of dictionary words (natural letter
//! frequencies, repeated words) and random letter groups (uniform letters,
//! like a ciphertext).

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WORDS: &[&str] = &[
    "ATTACK", "AT", "DAWN", "THE", "WEATHER", "REPORT", "NORTH", "SOUTH", "EAST", "WEST",
    "CONVOY", "SIGHTED", "HOLD", "POSITION", "RETREAT", "ADVANCE", "BRIDGE", "RIVER", "SUPPLY",
    "LINE", "NO", "CHANGE", "SEND", "MORE", "FUEL", "REPEAT",
];

/// Generate a sample message of `words` space-separated words.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `words`: number of words
pub fn generate_sample_message(seed: u64, words: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..words)
        .map(|_| match rng.gen_range(0..10) {
            // 70% dictionary words
            0..=6 => WORDS.choose(&mut rng).copied().unwrap_or("X").to_string(),
            // 30% five-letter groups
            _ => letter_group(&mut rng, 5),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn letter_group(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len).map(|_| (b'A' + rng.gen_range(0..26u8)) as char).collect()
}
