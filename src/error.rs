//! Error types for the enigmacrypt library.

use std::fmt;

/// Errors produced by the enigmacrypt library.
///
/// Every variant except [`EnigmaError::InvalidLetter`] is raised while a
/// machine is being configured. Enciphering itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A letter outside the A–Z alphabet reached a component that requires one.
    InvalidLetter(char),
    /// Rotor wiring does not have exactly 26 letters.
    InvalidWiringLength(usize),
    /// Rotor wiring contains a character outside the alphabet.
    InvalidWiringLetter(char),
    /// Rotor wiring uses the same output letter twice.
    DuplicateWiringLetter(char),
    /// Rotor was given no notch letters.
    EmptyNotch,
    /// Rotor notch contains a character outside the alphabet.
    InvalidNotchLetter(char),
    /// Reflector mapping does not have exactly 26 letters.
    InvalidReflectorLength(usize),
    /// Reflector mapping contains a character outside the alphabet.
    InvalidReflectorLetter(char),
    /// Reflector mapping uses a letter in more than one pair.
    DuplicateReflectorLetter(char),
    /// Initial rotor position is not an alphabet letter.
    InvalidPosition(char),
    /// Settings name a number of rotors other than three.
    InvalidRotorCount(usize),
    /// Settings positions are not exactly three letters.
    InvalidPositions(String),
    /// Rotor name not found in the custom definitions or the catalog.
    UnknownRotor(String),
    /// Reflector name not found in the custom definitions or the catalog.
    UnknownReflector(String),
    /// Settings text could not be parsed or serialized.
    InvalidSettings(String),
    /// Settings file could not be read.
    SettingsIo(String),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::InvalidLetter(c) => {
                write!(f, "Letter {:?} is not in the alphabet", c)
            }
            EnigmaError::InvalidWiringLength(len) => {
                write!(f, "Rotor wiring must have 26 letters, got {}", len)
            }
            EnigmaError::InvalidWiringLetter(c) => {
                write!(f, "Rotor wiring contains invalid character {:?}", c)
            }
            EnigmaError::DuplicateWiringLetter(c) => {
                write!(f, "Rotor wiring is not a permutation: {:?} repeats", c)
            }
            EnigmaError::EmptyNotch => {
                write!(f, "Rotor notch must contain at least one letter")
            }
            EnigmaError::InvalidNotchLetter(c) => {
                write!(f, "Rotor notch contains invalid character {:?}", c)
            }
            EnigmaError::InvalidReflectorLength(len) => {
                write!(f, "Reflector mapping must have 26 letters, got {}", len)
            }
            EnigmaError::InvalidReflectorLetter(c) => {
                write!(f, "Reflector mapping contains invalid character {:?}", c)
            }
            EnigmaError::DuplicateReflectorLetter(c) => {
                write!(
                    f,
                    "Reflector mapping is not 13 disjoint pairs: {:?} repeats",
                    c
                )
            }
            EnigmaError::InvalidPosition(c) => {
                write!(f, "Rotor position {:?} is not in the alphabet", c)
            }
            EnigmaError::InvalidRotorCount(n) => {
                write!(f, "Machine needs exactly 3 rotors, got {}", n)
            }
            EnigmaError::InvalidPositions(s) => {
                write!(f, "Rotor positions must be 3 letters, got {:?}", s)
            }
            EnigmaError::UnknownRotor(name) => write!(f, "Unknown rotor {:?}", name),
            EnigmaError::UnknownReflector(name) => {
                write!(f, "Unknown reflector {:?}", name)
            }
            EnigmaError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            EnigmaError::SettingsIo(msg) => {
                write!(f, "Could not read settings file: {}", msg)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
