//! Historical rotor and reflector wirings.

/// A named rotor wiring with its notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorPreset {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notch: char,
}

/// A named reflector wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorPreset {
    pub name: &'static str,
    pub wiring: &'static str,
}

/// Rotors I to V.
pub const ROTORS: [RotorPreset; 5] = [
    RotorPreset {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: 'Q',
    },
    RotorPreset {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: 'E',
    },
    RotorPreset {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: 'V',
    },
    RotorPreset {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: 'J',
    },
    RotorPreset {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: 'Z',
    },
];

/// Reflectors A, B and C.
pub const REFLECTORS: [ReflectorPreset; 3] = [
    ReflectorPreset {
        name: "A",
        wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
    },
    ReflectorPreset {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorPreset {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Look up a rotor by name, ignoring case.
pub fn rotor(name: &str) -> Option<&'static RotorPreset> {
    ROTORS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

/// Look up a reflector by name, ignoring case.
pub fn reflector(name: &str) -> Option<&'static ReflectorPreset> {
    REFLECTORS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
