//! Rotor: a substitution wheel with rotational state.
//!
//! A rotor maps contact `i` on its entry face to contact `wiring[i]` on its
//! exit face when sitting at offset zero. Turning the rotor shifts which
//! contact the incoming signal meets, so the effective substitution changes
//! with every step.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

/// A single rotating substitution wheel.
///
/// The wiring is validated as a permutation at construction and its inverse
/// is precomputed, so [`backward`](Self::backward) is a table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: [usize; ALPHABET_LEN],
    inverse: [usize; ALPHABET_LEN],
    notches: [bool; ALPHABET_LEN],
    position: usize,
}

impl Rotor {
    /// Creates a rotor at position `A`.
    ///
    /// # Parameters
    /// - `name`: Free-form label, informational only.
    /// - `wiring`: 26 letters forming a permutation of the alphabet. Letter
    ///   `i` is the output contact for input contact `i`.
    /// - `notch`: One or more letters; reaching any of them turns the next rotor.
    ///
    /// Lowercase letters in `wiring` and `notch` are accepted and uppercased.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiringLength`] if `wiring` is not 26 letters.
    /// - [`EnigmaError::InvalidWiringLetter`] for a character outside the alphabet.
    /// - [`EnigmaError::DuplicateWiringLetter`] if `wiring` is not a permutation.
    /// - [`EnigmaError::EmptyNotch`] / [`EnigmaError::InvalidNotchLetter`]
    ///   for a malformed notch.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Rotor;
    ///
    /// let rotor = Rotor::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// assert_eq!(rotor.forward(0), 4);
    ///
    /// assert!(Rotor::new("bad", "ABC", "A").is_err());
    /// ```
    pub fn new(name: &str, wiring: &str, notch: &str) -> Result<Self, EnigmaError> {
        let letters: Vec<char> = wiring.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != ALPHABET_LEN {
            return Err(EnigmaError::InvalidWiringLength(letters.len()));
        }

        let mut table = [0usize; ALPHABET_LEN];
        let mut inverse = [0usize; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (i, &c) in letters.iter().enumerate() {
            let out = alphabet::index_of(c).ok_or(EnigmaError::InvalidWiringLetter(c))?;
            if seen[out] {
                return Err(EnigmaError::DuplicateWiringLetter(c));
            }
            seen[out] = true;
            table[i] = out;
            inverse[out] = i;
        }

        let mut notches = [false; ALPHABET_LEN];
        let mut any_notch = false;
        for c in notch.chars().map(|c| c.to_ascii_uppercase()) {
            let idx = alphabet::index_of(c).ok_or(EnigmaError::InvalidNotchLetter(c))?;
            notches[idx] = true;
            any_notch = true;
        }
        if !any_notch {
            return Err(EnigmaError::EmptyNotch);
        }

        Ok(Rotor {
            name: name.to_string(),
            wiring: table,
            inverse,
            notches,
            position: 0,
        })
    }

    /// Builder form of [`set_position`](Self::set_position).
    pub fn with_position(mut self, letter: char) -> Result<Self, EnigmaError> {
        self.set_position(letter)?;
        Ok(self)
    }

    /// Sets the rotational offset to the index of `letter`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPosition`] if `letter` is not A–Z
    /// (lowercase is accepted).
    pub fn set_position(&mut self, letter: char) -> Result<(), EnigmaError> {
        self.position = alphabet::index_of(letter.to_ascii_uppercase())
            .ok_or(EnigmaError::InvalidPosition(letter))?;
        Ok(())
    }

    /// The rotor's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current rotational offset, `0..26`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current rotational offset as the letter showing in the window.
    pub fn position_letter(&self) -> char {
        alphabet::letter_at(self.position)
    }

    /// Notch letters in alphabet order.
    pub fn notch(&self) -> String {
        (0..ALPHABET_LEN)
            .filter(|&i| self.notches[i])
            .map(alphabet::letter_at)
            .collect()
    }

    /// Advances the rotor by one step, wrapping from `Z` to `A`.
    pub fn rotate(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Returns `true` if the letter at the current position is a notch letter.
    pub fn at_notch(&self) -> bool {
        self.notches[self.position]
    }

    /// Maps a signal entering from the plugboard side (before reflection).
    ///
    /// `signal_in` must be in `0..26`; the result is in `0..26`.
    pub fn forward(&self, signal_in: usize) -> usize {
        let entry = (signal_in + self.position) % ALPHABET_LEN;
        let output = self.wiring[entry];
        (output + ALPHABET_LEN - self.position) % ALPHABET_LEN
    }

    /// Maps a signal returning from the reflector side.
    ///
    /// Finds the input contact whose zero-offset forward output is the entry
    /// contact. `signal_in` must be in `0..26`; the result is in `0..26`.
    pub fn backward(&self, signal_in: usize) -> usize {
        let entry = (signal_in + self.position) % ALPHABET_LEN;
        let input = self.inverse[entry];
        (input + ALPHABET_LEN - self.position) % ALPHABET_LEN
    }
}
