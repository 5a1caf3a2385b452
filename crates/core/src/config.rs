//! Machine descriptions: what rotors, in what order, at what settings.
//!
//! A [`MachineConfig`] is plain data that can be written by hand in TOML,
//! generated from a seed, or assembled from command-line options. Nothing is
//! checked until [`MachineConfig::build`], which validates the whole machine
//! at once and returns a ready [`RotorSet`].
//!
//! # TOML Format
//!
//! ```toml
//! reflector = "B"      # preset name or 26-symbol wiring
//! repeat = 1
//!
//! [[rotors]]           # leftmost first
//! wiring = "I"         # preset name or 26-symbol wiring
//! position = 0
//! increment = 1
//!
//! [[rotors]]
//! wiring = "AJDKSIRUXBLHWTMCQGZNPYFVOE"
//! notch = "E"          # required for custom wirings
//! ```

use crate::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::error::{ConfigError, Result};
use crate::presets;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_set::RotorSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Complete description of a machine.
///
/// Unknown keys are rejected, so a typo in a machine file fails loudly
/// instead of silently falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Reflector preset name or wiring
    #[serde(default = "default_reflector")]
    pub reflector: String,

    /// Forward/backward passes per character
    #[serde(default = "default_repeat")]
    pub repeat: usize,

    /// Rotors, leftmost first
    pub rotors: Vec<RotorConfig>,
}

/// Description of a single rotor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotorConfig {
    /// Preset name or wiring
    pub wiring: String,

    /// Notch symbol; defaults to the preset's notch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notch: Option<char>,

    /// Initial position
    #[serde(default)]
    pub position: usize,

    /// Advance per step event
    #[serde(default = "default_increment")]
    pub increment: usize,
}

fn default_reflector() -> String {
    "B".to_string()
}

fn default_repeat() -> usize {
    1
}

fn default_increment() -> usize {
    1
}

impl RotorConfig {
    /// A preset rotor at position 0 with increment 1.
    pub fn preset(name: &str) -> Self {
        Self {
            wiring: name.to_string(),
            notch: None,
            position: 0,
            increment: default_increment(),
        }
    }

    fn build(&self, index: usize, alphabet: &Alphabet) -> Result<Rotor> {
        let (wiring, notch) = match presets::rotor(&self.wiring) {
            Some(preset) => (preset.wiring, self.notch.unwrap_or(preset.notch)),
            None if self.wiring.chars().count() == ALPHABET_SIZE => {
                let notch = self.notch.ok_or(ConfigError::MissingNotch { index })?;
                (self.wiring.as_str(), notch)
            }
            None => {
                return Err(ConfigError::UnknownPreset {
                    kind: "rotor",
                    name: self.wiring.clone(),
                }
                .into())
            }
        };

        Rotor::new(alphabet, wiring, notch, self.position, self.increment)
    }
}

impl MachineConfig {
    /// Rotors I, II, III with reflector B, all at position 0, increment 1.
    pub fn classic() -> Self {
        Self::with_rotors(&["I", "II", "III"])
    }

    /// Preset rotors by name (leftmost first) with reflector B.
    pub fn with_rotors(names: &[&str]) -> Self {
        Self {
            reflector: default_reflector(),
            repeat: default_repeat(),
            rotors: names.iter().map(|name| RotorConfig::preset(name)).collect(),
        }
    }

    /// Generate a random key from a seed.
    ///
    /// Picks `rotor_count` preset rotors (distinct while presets last) and
    /// random starting positions. Same seed, same key.
    pub fn random(seed: u64, rotor_count: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut order: Vec<usize> = (0..presets::ROTORS.len()).collect();
        order.shuffle(&mut rng);

        let rotors = (0..rotor_count)
            .map(|i| {
                let preset = &presets::ROTORS[order[i % order.len()]];
                RotorConfig {
                    wiring: preset.name.to_string(),
                    notch: None,
                    position: rng.gen_range(0..ALPHABET_SIZE),
                    increment: default_increment(),
                }
            })
            .collect();

        Self {
            reflector: default_reflector(),
            repeat: default_repeat(),
            rotors,
        }
    }

    /// Parse a TOML machine description.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Override every rotor's position, leftmost first.
    pub fn set_positions(&mut self, positions: &[usize]) -> std::result::Result<(), ConfigError> {
        self.check_count(positions.len())?;
        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.position = position;
        }
        Ok(())
    }

    /// Override every rotor's increment, leftmost first.
    pub fn set_increments(&mut self, increments: &[usize]) -> std::result::Result<(), ConfigError> {
        self.check_count(increments.len())?;
        for (rotor, &increment) in self.rotors.iter_mut().zip(increments) {
            rotor.increment = increment;
        }
        Ok(())
    }

    /// Validate the description and assemble the machine.
    pub fn build(&self) -> Result<RotorSet> {
        let alphabet = Alphabet::LATIN;

        let rotors = self
            .rotors
            .iter()
            .enumerate()
            .map(|(index, rotor)| rotor.build(index, &alphabet))
            .collect::<Result<Vec<_>>>()?;

        let wiring = match presets::reflector(&self.reflector) {
            Some(preset) => preset.wiring,
            None if self.reflector.chars().count() == ALPHABET_SIZE => self.reflector.as_str(),
            None => {
                return Err(ConfigError::UnknownPreset {
                    kind: "reflector",
                    name: self.reflector.clone(),
                }
                .into())
            }
        };
        let reflector = Reflector::new(&alphabet, wiring)?;

        RotorSet::new(rotors, reflector, self.repeat)
    }

    fn check_count(&self, actual: usize) -> std::result::Result<(), ConfigError> {
        if actual != self.rotors.len() {
            return Err(ConfigError::CountMismatch {
                expected: self.rotors.len(),
                actual,
            });
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_classic_builds() {
        let set = MachineConfig::classic().build().unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.positions(), vec![0, 0, 0]);
        assert_eq!(set.repeat(), 1);
        assert_eq!(set.window(), "EAB");
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            reflector = "b"
            repeat = 2

            [[rotors]]
            wiring = "I"
            position = 3

            [[rotors]]
            wiring = "AJDKSIRUXBLHWTMCQGZNPYFVOE"
            notch = "E"
            increment = 4
        "#;
        let config = MachineConfig::from_toml_str(text).unwrap();
        assert_eq!(config.repeat, 2);
        assert_eq!(config.rotors.len(), 2);
        assert_eq!(config.rotors[0].increment, 1);
        assert_eq!(config.rotors[1].notch, Some('E'));

        let set = config.build().unwrap();
        assert_eq!(set.positions(), vec![3, 0]);
        assert_eq!(set.rotors()[1].increment(), 4);
        assert_eq!(set.rotors()[0].notch(), 'Q');
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = MachineConfig::classic();
        config.set_positions(&[1, 2, 3]).unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(MachineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            MachineConfig::from_toml_str("repeat = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_custom_wiring_needs_notch() {
        let mut config = MachineConfig::classic();
        config.rotors[1].wiring = "AJDKSIRUXBLHWTMCQGZNPYFVOE".to_string();
        assert_eq!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::MissingNotch {
                index: 1
            }))
        );
    }

    #[test]
    fn test_unknown_presets() {
        let mut config = MachineConfig::with_rotors(&["I", "IX"]);
        assert!(matches!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::UnknownPreset { kind: "rotor", .. }))
        ));

        config.rotors[1] = RotorConfig::preset("II");
        config.reflector = "Z".to_string();
        assert!(matches!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::UnknownPreset {
                kind: "reflector",
                ..
            }))
        ));
    }

    #[test]
    fn test_out_of_range_settings_rejected() {
        let mut config = MachineConfig::classic();
        config.set_positions(&[0, 26, 0]).unwrap();
        assert!(matches!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::PositionOutOfRange { .. }))
        ));

        let mut config = MachineConfig::classic();
        config.set_increments(&[1, 1, 30]).unwrap();
        assert!(matches!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::IncrementOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_count_mismatch() {
        let mut config = MachineConfig::classic();
        assert_eq!(
            config.set_positions(&[1]),
            Err(ConfigError::CountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_empty_and_zero_repeat() {
        let config = MachineConfig::with_rotors(&[]);
        assert_eq!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::NoRotors))
        );

        let mut config = MachineConfig::classic();
        config.repeat = 0;
        assert_eq!(
            config.build(),
            Err(Error::InvalidConfiguration(ConfigError::ZeroRepeat))
        );
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = MachineConfig::random(42, 3);
        let b = MachineConfig::random(42, 3);
        assert_eq!(a, b);
        assert_eq!(a.rotors.len(), 3);
        assert!(a.build().is_ok());
    }

    #[test]
    fn test_random_rotors_distinct() {
        let config = MachineConfig::random(7, 5);
        let mut names: Vec<&str> = config.rotors.iter().map(|r| r.wiring.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let text = r#"
            alphabet = "0123456789ABCDEFGHIJKLMNOP"

            [[rotors]]
            wiring = "III"
        "#;
        assert!(matches!(
            MachineConfig::from_toml_str(text),
            Err(ConfigError::Parse(msg)) if msg.contains("alphabet")
        ));

        let text = r#"
            [[rotors]]
            wiring = "III"
            positon = 4
        "#;
        assert!(matches!(
            MachineConfig::from_toml_str(text),
            Err(ConfigError::Parse(_))
        ));
    }
}
