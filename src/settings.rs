//! Machine settings: which rotors, positions, reflector and plugboard pairs
//! to assemble, loadable from TOML.
//!
//! Rotor names and positions are listed left to right as mounted, so the
//! last entry is the fastest rotor. [`MachineSettings::build`] reverses them
//! into the machine's fastest-first order.
//!
//! ```toml
//! rotors = ["III", "II", "I"]
//! positions = "AAA"
//! reflector = "B"
//! plugboard = "AB CD"
//!
//! [[custom_rotor]]
//! name = "VI"
//! wiring = "JPGVOUMFYQBENHZRDKASXLICTW"
//! notch = "ZM"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog;
use crate::error::EnigmaError;
use crate::machine::{EnigmaMachine, NUM_ROTORS};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// A rotor definition supplied in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotorSpec {
    pub name: String,
    pub wiring: String,
    pub notch: String,
}

/// A reflector definition supplied in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReflectorSpec {
    pub name: String,
    pub mapping: String,
}

/// Everything needed to assemble an [`EnigmaMachine`].
///
/// Missing fields take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineSettings {
    /// Rotor names, left to right (slowest first).
    pub rotors: Vec<String>,
    /// One position letter per rotor, left to right. Whitespace is ignored.
    pub positions: String,
    /// Reflector name.
    pub reflector: String,
    /// Whitespace-separated plugboard pairs.
    pub plugboard: String,
    /// Extra rotors; a custom name shadows the catalog.
    #[serde(rename = "custom_rotor", skip_serializing_if = "Vec::is_empty")]
    pub custom_rotors: Vec<RotorSpec>,
    /// Extra reflectors; a custom name shadows the catalog.
    #[serde(rename = "custom_reflector", skip_serializing_if = "Vec::is_empty")]
    pub custom_reflectors: Vec<ReflectorSpec>,
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            rotors: vec!["III".to_string(), "II".to_string(), "I".to_string()],
            positions: "AAA".to_string(),
            reflector: "B".to_string(),
            plugboard: String::new(),
            custom_rotors: Vec::new(),
            custom_reflectors: Vec::new(),
        }
    }
}

impl MachineSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSettings`] if the text is not valid
    /// settings TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, EnigmaError> {
        toml::from_str(text).map_err(|e| EnigmaError::InvalidSettings(e.to_string()))
    }

    /// Serializes the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String, EnigmaError> {
        toml::to_string_pretty(self).map_err(|e| EnigmaError::InvalidSettings(e.to_string()))
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SettingsIo`] if the file cannot be read, or
    /// [`EnigmaError::InvalidSettings`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnigmaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EnigmaError::SettingsIo(format!("{}: {}", path.display(), e)))?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded machine settings");
        Ok(settings)
    }

    /// Assembles a machine from these settings.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidRotorCount`] unless exactly three rotors are named.
    /// - [`EnigmaError::InvalidPositions`] unless exactly three positions are given.
    /// - [`EnigmaError::UnknownRotor`] / [`EnigmaError::UnknownReflector`] for
    ///   names found nowhere.
    /// - Any construction error from a custom rotor or reflector definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::MachineSettings;
    ///
    /// let settings = MachineSettings::from_toml_str(
    ///     r#"
    ///     rotors = ["III", "II", "I"]
    ///     positions = "AAA"
    ///     plugboard = "AB CD"
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// let ciphertext = settings.build().unwrap().encrypt_text("HELLO");
    /// assert_eq!(settings.build().unwrap().encrypt_text(&ciphertext), "HELLO");
    /// ```
    pub fn build(&self) -> Result<EnigmaMachine, EnigmaError> {
        if self.rotors.len() != NUM_ROTORS {
            return Err(EnigmaError::InvalidRotorCount(self.rotors.len()));
        }
        let positions: Vec<char> = self
            .positions
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if positions.len() != NUM_ROTORS {
            return Err(EnigmaError::InvalidPositions(self.positions.clone()));
        }

        let mount = |slot: usize| -> Result<Rotor, EnigmaError> {
            self.rotor(&self.rotors[slot])?
                .with_position(positions[slot])
        };
        let rotors = [mount(2)?, mount(1)?, mount(0)?];

        debug!(
            rotors = ?self.rotors,
            positions = %self.positions,
            reflector = %self.reflector,
            "building machine from settings"
        );
        Ok(EnigmaMachine::new(
            rotors,
            self.reflector()?,
            Plugboard::new(&self.plugboard),
        ))
    }

    fn rotor(&self, name: &str) -> Result<Rotor, EnigmaError> {
        match self.custom_rotors.iter().find(|r| r.name == name) {
            Some(spec) => Rotor::new(&spec.name, &spec.wiring, &spec.notch),
            None => catalog::standard_rotor(name),
        }
    }

    fn reflector(&self) -> Result<Reflector, EnigmaError> {
        match self
            .custom_reflectors
            .iter()
            .find(|r| r.name == self.reflector)
        {
            Some(spec) => Reflector::new(&spec.name, &spec.mapping),
            None => catalog::standard_reflector(&self.reflector),
        }
    }
}
