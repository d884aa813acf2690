//! Named wiring tables for the standard rotors and reflectors.
//!
//! Reflector tables are read as 13 consecutive pairs, the same way
//! [`Reflector::new`] reads any mapping.

use crate::error::EnigmaError;
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Wiring and notch of a catalog rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorWiring {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notch: &'static str,
}

/// Pair table of a catalog reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorWiring {
    pub name: &'static str,
    pub mapping: &'static str,
}

pub const STANDARD_ROTORS: [RotorWiring; 5] = [
    RotorWiring {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: "Q",
    },
    RotorWiring {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: "E",
    },
    RotorWiring {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: "V",
    },
    RotorWiring {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: "J",
    },
    RotorWiring {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: "Z",
    },
];

pub const STANDARD_REFLECTORS: [ReflectorWiring; 2] = [
    ReflectorWiring {
        name: "B",
        mapping: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorWiring {
        name: "C",
        mapping: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Builds catalog rotor `name` at position `A`.
///
/// # Errors
/// Returns [`EnigmaError::UnknownRotor`] if `name` is not in [`STANDARD_ROTORS`].
pub fn standard_rotor(name: &str) -> Result<Rotor, EnigmaError> {
    let spec = STANDARD_ROTORS
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
    Rotor::new(spec.name, spec.wiring, spec.notch)
}

/// Builds catalog reflector `name`.
///
/// # Errors
/// Returns [`EnigmaError::UnknownReflector`] if `name` is not in
/// [`STANDARD_REFLECTORS`].
pub fn standard_reflector(name: &str) -> Result<Reflector, EnigmaError> {
    let spec = STANDARD_REFLECTORS
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))?;
    Reflector::new(spec.name, spec.mapping)
}

/// The default machine: rotors III, II, I mounted left to right (so I is
/// fastest), reflector B, all positions `A`, empty plugboard.
pub fn standard_machine() -> Result<EnigmaMachine, EnigmaError> {
    let rotors = [
        standard_rotor("I")?,
        standard_rotor("II")?,
        standard_rotor("III")?,
    ];
    Ok(EnigmaMachine::new(
        rotors,
        standard_reflector("B")?,
        Plugboard::default(),
    ))
}
