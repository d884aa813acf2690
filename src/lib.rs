//! Three-rotor electromechanical cipher machine simulator.
//!
//! The machine enciphers letter by letter. Before every letter its rotors
//! step like an odometer; the signal then runs through the plugboard, the
//! rotor stack, the reflector, back through the rotor stack and out through
//! the plugboard. Because the reflector pairs letters, the whole function is
//! its own inverse: enciphering the ciphertext on an identically configured
//! machine restores the plaintext.
//!
//! # Architecture
//!
//! ```text
//! Rotor       (rotating substitution wheel with notch-triggered carry)
//! Reflector   (fixed 13-pair involution)
//! Plugboard   (configurable swaps around the rotor path)
//!     ↓ composed by
//! EnigmaMachine (stepping + signal path + text iteration)
//!     ↑ assembled from
//! catalog / MachineSettings (named wiring tables, TOML settings)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the default configuration:
//!
//! ```
//! use enigmacrypt::catalog;
//!
//! let mut encoder = catalog::standard_machine().unwrap();
//! let ciphertext = encoder.encrypt_text("HELLO WORLD");
//! assert_eq!(ciphertext, "VRBPV KKAKS");
//!
//! let mut decoder = catalog::standard_machine().unwrap();
//! assert_eq!(decoder.encrypt_text(&ciphertext), "HELLO WORLD");
//! ```
//!
//! Assemble a machine from settings:
//!
//! ```
//! use enigmacrypt::MachineSettings;
//!
//! let settings = MachineSettings {
//!     rotors: vec!["V".into(), "IV".into(), "III".into()],
//!     positions: "QEV".into(),
//!     reflector: "C".into(),
//!     plugboard: "AZ BY".into(),
//!     ..MachineSettings::default()
//! };
//! let mut machine = settings.build().unwrap();
//! assert_eq!(machine.encrypt_text("THE QUICK BROWN FOX"), "BAM ALLBL GLDDD MFR");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod settings;

mod machine;
mod plugboard;
mod reflector;
mod rotor;

pub use error::EnigmaError;
pub use machine::{EnigmaMachine, NUM_ROTORS};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::{MachineSettings, ReflectorSpec, RotorSpec};
