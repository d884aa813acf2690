//! Plugboard: configurable letter swaps before and after the rotors.

use crate::alphabet::{self, ALPHABET_LEN};

/// An involutive substitution over a configurable subset of letters.
///
/// Starts as the identity. Each well-formed pair swaps two letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [usize; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            mapping: std::array::from_fn(|i| i),
        }
    }
}

impl Plugboard {
    /// Creates a plugboard wired with `pairs` (see [`set_pairs`](Self::set_pairs)).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Plugboard;
    ///
    /// let plugboard = Plugboard::new("AB CD");
    /// assert_eq!(plugboard.process('A'), 'B');
    /// assert_eq!(plugboard.process('D'), 'C');
    /// assert_eq!(plugboard.process('E'), 'E');
    /// ```
    pub fn new(pairs: &str) -> Self {
        let mut plugboard = Plugboard::default();
        plugboard.set_pairs(pairs);
        plugboard
    }

    /// Wires each whitespace-separated two-letter token as a swapped pair.
    ///
    /// Tokens are uppercased first. Tokens that are not exactly two alphabet
    /// letters are skipped without error. A later pair that reuses a letter
    /// replaces the earlier pair: the old partners are unplugged, so the
    /// mapping stays involutive.
    pub fn set_pairs(&mut self, pairs: &str) {
        for token in pairs.split_whitespace() {
            let letters: Vec<char> = token.chars().map(|c| c.to_ascii_uppercase()).collect();
            if letters.len() != 2 {
                continue;
            }
            let (Some(a), Some(b)) = (
                alphabet::index_of(letters[0]),
                alphabet::index_of(letters[1]),
            ) else {
                continue;
            };
            self.unplug(a);
            self.unplug(b);
            self.mapping[a] = b;
            self.mapping[b] = a;
        }
    }

    /// Returns the swapped letter, or `letter` itself if it is unplugged or
    /// not in the alphabet.
    pub fn process(&self, letter: char) -> char {
        match alphabet::index_of(letter) {
            Some(index) => alphabet::letter_at(self.mapping[index]),
            None => letter,
        }
    }

    /// Index form of [`process`](Self::process) used on the cipher path.
    pub(crate) fn process_index(&self, index: usize) -> usize {
        self.mapping[index]
    }

    /// Returns the wired pairs, each ordered and listed by first letter.
    pub fn pairs(&self) -> Vec<(char, char)> {
        (0..ALPHABET_LEN)
            .filter(|&i| self.mapping[i] > i)
            .map(|i| (alphabet::letter_at(i), alphabet::letter_at(self.mapping[i])))
            .collect()
    }

    /// Restores `index` and its current partner to themselves.
    fn unplug(&mut self, index: usize) {
        let partner = self.mapping[index];
        self.mapping[partner] = partner;
        self.mapping[index] = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;

    fn assert_involutive(plugboard: &Plugboard) {
        for &c in ALPHABET.iter() {
            assert_eq!(plugboard.process(plugboard.process(c)), c, "letter {}", c);
        }
    }

    #[test]
    fn test_default_is_identity() {
        let plugboard = Plugboard::default();
        for &c in ALPHABET.iter() {
            assert_eq!(plugboard.process(c), c);
        }
        assert!(plugboard.pairs().is_empty());
        assert_eq!(plugboard, Plugboard::new(""));
    }

    #[test]
    fn test_single_pair() {
        let plugboard = Plugboard::new("AB");
        assert_eq!(plugboard.process('A'), 'B');
        assert_eq!(plugboard.process('B'), 'A');
        assert_eq!(plugboard.process(plugboard.process('A')), 'A');
        assert_eq!(plugboard.pairs(), vec![('A', 'B')]);
    }

    #[test]
    fn test_lowercase_tokens_and_extra_whitespace() {
        let plugboard = Plugboard::new("  qw \t er\n");
        assert_eq!(plugboard.pairs(), vec![('E', 'R'), ('Q', 'W')]);
    }

    #[test]
    fn test_malformed_tokens_skipped() {
        let plugboard = Plugboard::new("A");
        assert_eq!(plugboard, Plugboard::default());
        let plugboard = Plugboard::new("ABC");
        assert_eq!(plugboard, Plugboard::default());
        let plugboard = Plugboard::new("A1 ?? ÄB XY");
        assert_eq!(plugboard.pairs(), vec![('X', 'Y')]);
    }

    #[test]
    fn test_non_alphabet_passes_through() {
        let plugboard = Plugboard::new("AB");
        assert_eq!(plugboard.process(' '), ' ');
        assert_eq!(plugboard.process('7'), '7');
        assert_eq!(plugboard.process('a'), 'a');
    }

    #[test]
    fn test_later_pair_overrides_shared_letter() {
        let plugboard = Plugboard::new("AB AC");
        assert_eq!(plugboard.process('A'), 'C');
        assert_eq!(plugboard.process('C'), 'A');
        assert_eq!(plugboard.process('B'), 'B');
        assert_involutive(&plugboard);
    }

    #[test]
    fn test_set_pairs_accumulates() {
        let mut plugboard = Plugboard::new("AB");
        plugboard.set_pairs("CD");
        assert_eq!(plugboard.pairs(), vec![('A', 'B'), ('C', 'D')]);
        plugboard.set_pairs("BD");
        assert_eq!(plugboard.pairs(), vec![('B', 'D')]);
        assert_involutive(&plugboard);
    }

    #[test]
    fn test_doubled_letter_token_unplugs() {
        let plugboard = Plugboard::new("AB AA");
        assert_eq!(plugboard, Plugboard::default());
    }
}
