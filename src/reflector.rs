//! Reflector: fixed involutive substitution at the end of the rotor stack.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Sentinel for a contact that has not been paired yet during construction.
const UNPAIRED: usize = usize::MAX;

/// A fixed wheel that pairs every letter with a distinct partner.
///
/// Built from 13 disjoint pairs, so reflecting twice returns the original
/// letter and no letter ever reflects to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    reflection_map: [usize; ALPHABET_LEN],
}

impl Reflector {
    /// Creates a reflector from 26 letters read as consecutive pairs.
    ///
    /// Characters 0–1 form the first pair, 2–3 the second, and so on.
    /// Lowercase letters are accepted and uppercased.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidReflectorLength`] if `mapping` is not 26 letters.
    /// - [`EnigmaError::InvalidReflectorLetter`] for a character outside the alphabet.
    /// - [`EnigmaError::DuplicateReflectorLetter`] if a letter appears twice
    ///   (including a letter paired with itself).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Reflector;
    ///
    /// let reflector = Reflector::new("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// assert_eq!(reflector.reflect('Y').unwrap(), 'R');
    /// assert_eq!(reflector.reflect('R').unwrap(), 'Y');
    /// ```
    pub fn new(name: &str, mapping: &str) -> Result<Self, EnigmaError> {
        let letters: Vec<char> = mapping.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != ALPHABET_LEN {
            return Err(EnigmaError::InvalidReflectorLength(letters.len()));
        }

        let mut reflection_map = [UNPAIRED; ALPHABET_LEN];
        for pair in letters.chunks_exact(2) {
            let (first, second) = (pair[0], pair[1]);
            let a = alphabet::index_of(first).ok_or(EnigmaError::InvalidReflectorLetter(first))?;
            let b = alphabet::index_of(second).ok_or(EnigmaError::InvalidReflectorLetter(second))?;
            if reflection_map[a] != UNPAIRED {
                return Err(EnigmaError::DuplicateReflectorLetter(first));
            }
            if a == b || reflection_map[b] != UNPAIRED {
                return Err(EnigmaError::DuplicateReflectorLetter(second));
            }
            reflection_map[a] = b;
            reflection_map[b] = a;
        }

        Ok(Reflector {
            name: name.to_string(),
            reflection_map,
        })
    }

    /// The reflector's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the partner of `letter`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] if `letter` is not A–Z.
    pub fn reflect(&self, letter: char) -> Result<char, EnigmaError> {
        let index = alphabet::index_of(letter).ok_or(EnigmaError::InvalidLetter(letter))?;
        Ok(alphabet::letter_at(self.reflect_index(index)))
    }

    /// Index form of [`reflect`](Self::reflect) used on the cipher path,
    /// where the signal is always a valid contact.
    pub(crate) fn reflect_index(&self, index: usize) -> usize {
        self.reflection_map[index]
    }
}
