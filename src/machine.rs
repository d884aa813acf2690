//! EnigmaMachine: three rotors, a reflector and a plugboard composed into a
//! reciprocal letter-by-letter cipher.
//!
//! Per letter the machine first steps its rotors, then sends the signal
//! through the plugboard, forward through the rotors (fastest first), through
//! the reflector, backward through the rotors (slowest first) and out through
//! the plugboard again.

use tracing::{debug, trace};

use crate::alphabet;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Number of rotors in the stack.
pub const NUM_ROTORS: usize = 3;

/// A three-rotor cipher machine.
///
/// Rotors are held fastest first: `rotors[0]` steps on every letter,
/// `rotors[1]` when `rotors[0]` reaches a notch, and `rotors[2]` when
/// `rotors[1]` reaches a notch. Only rotor positions change while
/// enciphering.
///
/// A machine is not meant to be shared between concurrent callers; build one
/// machine per stream.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    rotors: [Rotor; NUM_ROTORS],
    reflector: Reflector,
    plugboard: Plugboard,
    initial_positions: [usize; NUM_ROTORS],
}

impl EnigmaMachine {
    /// Assembles a machine.
    ///
    /// # Parameters
    /// - `rotors`: The rotor stack, fastest (rightmost) first, already set to
    ///   their initial positions.
    /// - `reflector`: The reflector.
    /// - `plugboard`: The plugboard.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{EnigmaMachine, Plugboard, Reflector, Rotor};
    ///
    /// let build = || {
    ///     let rotors = [
    ///         Rotor::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap(),
    ///         Rotor::new("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E").unwrap(),
    ///         Rotor::new("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V").unwrap(),
    ///     ];
    ///     let reflector = Reflector::new("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    ///     EnigmaMachine::new(rotors, reflector, Plugboard::new("AB CD"))
    /// };
    ///
    /// let ciphertext = build().encrypt_text("Hello, world");
    /// assert_eq!(build().encrypt_text(&ciphertext), "HELLO, WORLD");
    /// ```
    pub fn new(rotors: [Rotor; NUM_ROTORS], reflector: Reflector, plugboard: Plugboard) -> Self {
        let initial_positions = [
            rotors[0].position(),
            rotors[1].position(),
            rotors[2].position(),
        ];
        debug!(
            rotors = ?[rotors[0].name(), rotors[1].name(), rotors[2].name()],
            reflector = reflector.name(),
            plugboard = ?plugboard.pairs(),
            "assembled machine"
        );
        EnigmaMachine {
            rotors,
            reflector,
            plugboard,
            initial_positions,
        }
    }

    /// The rotor stack, fastest first.
    pub fn rotors(&self) -> &[Rotor; NUM_ROTORS] {
        &self.rotors
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Letters currently showing on each rotor, fastest first.
    pub fn positions(&self) -> [char; NUM_ROTORS] {
        [
            self.rotors[0].position_letter(),
            self.rotors[1].position_letter(),
            self.rotors[2].position_letter(),
        ]
    }

    /// Returns every rotor to the position it had when the machine was built.
    ///
    /// Afterwards the machine enciphers exactly like a freshly assembled one.
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(self.initial_positions.iter()) {
            while rotor.position() != position {
                rotor.rotate();
            }
        }
        debug!(positions = ?self.positions(), "reset rotors");
    }

    /// Enciphers one letter.
    ///
    /// Characters outside A–Z (including lowercase) are returned unchanged
    /// and do not step the rotors.
    pub fn encrypt_letter(&mut self, letter: char) -> char {
        let Some(input) = alphabet::index_of(letter) else {
            return letter;
        };

        self.step_rotors();

        let mut signal = self.plugboard.process_index(input);
        for rotor in self.rotors.iter() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect_index(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.backward(signal);
        }
        let output = alphabet::letter_at(self.plugboard.process_index(signal));

        trace!(%letter, %output, positions = ?self.positions(), "enciphered letter");
        output
    }

    /// Enciphers a text.
    ///
    /// ASCII letters are uppercased first; every other character passes
    /// through unchanged, so the output has the same number of characters in
    /// the same places. Enciphering the output on a machine built with the
    /// same configuration restores the uppercased input.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::catalog;
    ///
    /// let mut machine = catalog::standard_machine().unwrap();
    /// let ciphertext = machine.encrypt_text("attack at dawn!");
    /// assert_eq!(ciphertext.len(), "attack at dawn!".len());
    /// assert!(ciphertext.ends_with('!'));
    /// ```
    pub fn encrypt_text(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.encrypt_letter(c.to_ascii_uppercase()))
            .collect()
    }

    /// Odometer stepping: the fastest rotor always turns; each further rotor
    /// turns only if the rotor just turned has landed on a notch.
    fn step_rotors(&mut self) {
        self.rotors[0].rotate();
        if self.rotors[0].at_notch() {
            self.rotors[1].rotate();
            if self.rotors[1].at_notch() {
                self.rotors[2].rotate();
            }
        }
    }
}
