//! The fixed 26-letter alphabet and letter/index conversions.
//!
//! Every component addresses its contacts by index `0..26`. All conversions
//! between letters and indices go through [`ALPHABET`], which never changes.

/// Number of letters (and contacts on every wheel).
pub const ALPHABET_LEN: usize = 26;

/// The ordered alphabet. Index `i` is the letter at contact `i`.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the contact index of `letter`, or `None` if it is not in the alphabet.
///
/// Lowercase letters are not members of the alphabet.
///
/// # Examples
///
/// ```
/// use enigmacrypt::alphabet::index_of;
///
/// assert_eq!(index_of('A'), Some(0));
/// assert_eq!(index_of('Z'), Some(25));
/// assert_eq!(index_of('a'), None);
/// ```
pub fn index_of(letter: char) -> Option<usize> {
    ALPHABET.iter().position(|&c| c == letter)
}

/// Returns the letter at contact `index`.
///
/// # Panics
/// Panics if `index >= 26`. Callers only pass indices produced by the
/// cipher path, which are always reduced modulo 26.
pub fn letter_at(index: usize) -> char {
    ALPHABET[index]
}

/// Returns `true` if `letter` is one of the 26 alphabet letters.
pub fn contains(letter: char) -> bool {
    index_of(letter).is_some()
}
