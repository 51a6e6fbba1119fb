//! The two hexadecimal alphabets.

const LOWER_HEX_CHARS: [u8; 16] = *b"0123456789abcdef";
const UPPER_HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";

/// Marks bytes that are not part of an alphabet.
const INVALID: u8 = 0xFF;

/// Build the reverse (character -> nibble) table of an alphabet.
const fn reverse_table(alphabet: &[u8; 16]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut nibble = 0;
    while nibble < alphabet.len() {
        table[alphabet[nibble] as usize] = nibble as u8;
        nibble += 1;
    }
    table
}

const LOWER_DECODE_TABLE: [u8; 256] = reverse_table(&LOWER_HEX_CHARS);
const UPPER_DECODE_TABLE: [u8; 256] = reverse_table(&UPPER_HEX_CHARS);

/// Letter case of the digits `a` through `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    /// `0123456789abcdef`
    #[default]
    Lower,
    /// `0123456789ABCDEF`
    Upper,
}

impl LetterCase {
    /// The 16 symbols of this alphabet, indexed by nibble value.
    #[must_use]
    pub const fn hex_chars(self) -> &'static [u8; 16] {
        match self {
            LetterCase::Lower => &LOWER_HEX_CHARS,
            LetterCase::Upper => &UPPER_HEX_CHARS,
        }
    }

    /// `true` for [`LetterCase::Lower`].
    #[must_use]
    pub const fn is_lower_case(self) -> bool {
        matches!(self, LetterCase::Lower)
    }

    /// `true` for [`LetterCase::Upper`].
    #[must_use]
    pub const fn is_upper_case(self) -> bool {
        matches!(self, LetterCase::Upper)
    }

    const fn decode_table(self) -> &'static [u8; 256] {
        match self {
            LetterCase::Lower => &LOWER_DECODE_TABLE,
            LetterCase::Upper => &UPPER_DECODE_TABLE,
        }
    }

    /// Look up the value of a single digit in this alphabet only.
    #[inline]
    #[must_use]
    pub const fn nibble(self, c: u8) -> Option<u8> {
        match self.decode_table()[c as usize] {
            INVALID => None,
            n => Some(n),
        }
    }
}

/// Look up a single digit in the lowercase alphabet, then the uppercase one.
///
/// Each digit is resolved on its own, so one octet may mix cases (`"Ab"` is fine).
#[inline]
pub(crate) const fn any_case_nibble(c: u8) -> Option<u8> {
    match LetterCase::Lower.nibble(c) {
        Some(n) => Some(n),
        None => LetterCase::Upper.nibble(c),
    }
}

/// Resolve a digit under an explicit case, or under either case when none is given.
#[inline]
pub(crate) const fn nibble(c: u8, case: Option<LetterCase>) -> Option<u8> {
    match case {
        Some(case) => case.nibble(c),
        None => any_case_nibble(c),
    }
}
