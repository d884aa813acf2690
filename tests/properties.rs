//! Property-based tests for the cipher machine.
//!
//! These check behavior over arbitrary configurations rather than frozen
//! outputs: reciprocity, rotor bijection, plugboard involution and
//! non-alphabetic pass-through.

use enigmacrypt::alphabet::{letter_at, ALPHABET_LEN};
use enigmacrypt::catalog::{STANDARD_REFLECTORS, STANDARD_ROTORS};
use enigmacrypt::{EnigmaMachine, MachineSettings, Plugboard, Rotor};
use proptest::prelude::*;

fn wiring_strategy() -> impl Strategy<Value = String> {
    Just((0..ALPHABET_LEN).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|perm| perm.into_iter().map(letter_at).collect::<String>())
}

fn letter_strategy() -> impl Strategy<Value = char> {
    (0..ALPHABET_LEN).prop_map(letter_at)
}

fn settings_strategy() -> impl Strategy<Value = MachineSettings> {
    let rotor_name = (0..STANDARD_ROTORS.len()).prop_map(|i| STANDARD_ROTORS[i].name.to_string());
    let reflector_name =
        (0..STANDARD_REFLECTORS.len()).prop_map(|i| STANDARD_REFLECTORS[i].name.to_string());
    (
        prop::collection::vec(rotor_name, 3),
        prop::collection::vec(letter_strategy(), 3),
        reflector_name,
        "([A-Z]{2} ){0,10}",
    )
        .prop_map(|(rotors, positions, reflector, plugboard)| MachineSettings {
            rotors,
            positions: positions.into_iter().collect(),
            reflector,
            plugboard,
            ..MachineSettings::default()
        })
}

fn build(settings: &MachineSettings) -> EnigmaMachine {
    settings.build().unwrap()
}

proptest! {
    /// Property: a fresh identical machine turns ciphertext back into plaintext.
    #[test]
    fn prop_reciprocity(settings in settings_strategy(), text in "[A-Z]{0,300}") {
        let ciphertext = build(&settings).encrypt_text(&text);
        prop_assert_eq!(ciphertext.len(), text.len());
        let decrypted = build(&settings).encrypt_text(&ciphertext);
        prop_assert_eq!(decrypted, text);
    }

    /// Property: mixed text keeps its layout and still decrypts.
    #[test]
    fn prop_reciprocity_mixed_text(settings in settings_strategy(), text in "[A-Za-z0-9 .,!?]{0,200}") {
        let ciphertext = build(&settings).encrypt_text(&text);
        prop_assert_eq!(ciphertext.chars().count(), text.chars().count());
        for (c, p) in ciphertext.chars().zip(text.chars()) {
            prop_assert_eq!(c.is_ascii_alphabetic(), p.is_ascii_alphabetic());
            if !p.is_ascii_alphabetic() {
                prop_assert_eq!(c, p);
            }
        }
        let decrypted = build(&settings).encrypt_text(&ciphertext);
        prop_assert_eq!(decrypted, text.to_ascii_uppercase());
    }

    /// Property: no letter ever enciphers to itself.
    #[test]
    fn prop_no_fixed_points(settings in settings_strategy(), text in "[A-Z]{1,100}") {
        let ciphertext = build(&settings).encrypt_text(&text);
        for (c, p) in ciphertext.chars().zip(text.chars()) {
            prop_assert_ne!(c, p);
        }
    }

    /// Property: backward(forward(x)) == x for any wiring at any position.
    #[test]
    fn prop_rotor_bijection(wiring in wiring_strategy(), position in letter_strategy()) {
        let rotor = Rotor::new("random", &wiring, "A").unwrap().with_position(position).unwrap();
        for signal in 0..ALPHABET_LEN {
            let out = rotor.forward(signal);
            prop_assert!(out < ALPHABET_LEN);
            prop_assert_eq!(rotor.backward(out), signal);
        }
    }

    /// Property: any two distinct letters pair up and swap back.
    #[test]
    fn prop_plugboard_involution(a in letter_strategy(), b in letter_strategy()) {
        prop_assume!(a != b);
        let plugboard = Plugboard::new(&format!("{}{}", a, b));
        prop_assert_eq!(plugboard.process(a), b);
        prop_assert_eq!(plugboard.process(plugboard.process(a)), a);
    }

    /// Property: the plugboard stays involutive for arbitrary, overlapping pairs.
    #[test]
    fn prop_plugboard_always_involutive(pairs in "[A-Za-z0-9 ]{0,60}") {
        let plugboard = Plugboard::new(&pairs);
        for i in 0..ALPHABET_LEN {
            let c = letter_at(i);
            prop_assert_eq!(plugboard.process(plugboard.process(c)), c);
        }
    }

    /// Property: non-letters pass through without stepping the rotors.
    #[test]
    fn prop_non_alphabetic_pass_through(settings in settings_strategy(), c in "[0-9 .,;:!?a-z]") {
        let mut machine = build(&settings);
        let before = machine.positions();
        let c = c.chars().next().unwrap();
        prop_assert_eq!(machine.encrypt_letter(c), c);
        prop_assert_eq!(machine.positions(), before);
    }
}
