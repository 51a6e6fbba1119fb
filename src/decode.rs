//! Hexadecimal text back to bytes.

use crate::{
    context,
    error::{HexError, Result},
    letter_case::{self, LetterCase},
};

/// Stand-in for a non-ASCII character; no alphabet contains it.
const NON_DIGIT: u8 = 0x80;

/// Decoding configuration.
///
/// The free functions ([`decode`], [`decode_delimited`], ...) are shorthands for a
/// `Decoder` without a context radius of its own.
///
/// ```
/// use hexstrings::{Decoder, LetterCase};
///
/// let decoder = Decoder::new().case(LetterCase::Upper).delimiter_len(1);
/// assert_eq!(decoder.decode("DE:AD").unwrap(), [0xDE, 0xAD]);
///
/// let err = decoder.context_radius(2).decode("DE:aD").unwrap_err();
/// assert_eq!(err.to_string(), "At index 2 in 'E:aD'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoder {
    case: Option<LetterCase>,
    delimiter_len: usize,
    context_radius: Option<usize>,
}

impl Decoder {
    /// Accept either case per digit, no delimiter, process-wide context radius.
    #[must_use]
    pub const fn new() -> Self {
        Decoder {
            case: None,
            delimiter_len: 0,
            context_radius: None,
        }
    }

    /// Only accept digits of `case`.
    #[must_use]
    pub const fn case(mut self, case: LetterCase) -> Self {
        self.case = Some(case);
        self
    }

    /// Accept digits of either case, independently for every digit.
    #[must_use]
    pub const fn any_case(mut self) -> Self {
        self.case = None;
        self
    }

    /// Skip `len` characters between octets. Their contents are not checked.
    #[must_use]
    pub const fn delimiter_len(mut self, len: usize) -> Self {
        self.delimiter_len = len;
        self
    }

    /// Quote `radius` characters around faults instead of the process-wide radius.
    #[must_use]
    pub const fn context_radius(mut self, radius: usize) -> Self {
        self.context_radius = Some(radius);
        self
    }

    /// Decode `text` under this configuration.
    ///
    /// Positions and lengths count characters.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::Malformed`] on an odd digit count, a digit outside the
    /// accepted alphabet(s), or a length that does not fit the delimiter.
    pub fn decode<T: AsRef<str>>(&self, text: T) -> Result<Vec<u8>> {
        let text = text.as_ref();
        if text.is_ascii() {
            return self.decode_units(text, text.as_bytes());
        }

        // One unit per character. Non-ASCII characters are never digits.
        let units: Vec<u8> = text
            .chars()
            .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(NON_DIGIT))
            .collect();
        self.decode_units(text, &units)
    }

    /// Decode `units`, the per-character view of `text`.
    fn decode_units(&self, text: &str, units: &[u8]) -> Result<Vec<u8>> {
        if self.delimiter_len == 0 || units.len() <= 2 {
            return self.decode_octets(text, units, 2);
        }

        // One delimiter fewer than octets, so pad one in to get a whole number of strides.
        let stride = self.delimiter_len.saturating_add(2);
        match units.len().checked_add(self.delimiter_len) {
            Some(padded) if padded % stride == 0 => self.decode_octets(text, units, stride),
            _ => Err(self.malformed(text, units.len())),
        }
    }

    /// Decode octets whose first digits sit `stride` characters apart.
    fn decode_octets(&self, text: &str, units: &[u8], stride: usize) -> Result<Vec<u8>> {
        if stride == 2 && units.len() % 2 != 0 {
            return Err(self.malformed(text, units.len()));
        }

        let mut out = Vec::with_capacity(units.len().div_ceil(stride));
        for start in (0..units.len()).step_by(stride) {
            let high = letter_case::nibble(units[start], self.case);
            let low = letter_case::nibble(units[start + 1], self.case);
            match (high, low) {
                (Some(high), Some(low)) => out.push((high << 4) | low),
                _ => return Err(self.malformed(text, start)),
            }
        }
        Ok(out)
    }

    fn malformed(&self, text: &str, position: usize) -> HexError {
        context::malformed(text, position, self.context_radius)
    }
}

/// Decode undelimited text, accepting either case for every digit.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode<T: AsRef<str>>(text: T) -> Result<Vec<u8>> {
    Decoder::new().decode(text)
}

/// Decode undelimited text whose digits must all be of `case`.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode_with_case<T: AsRef<str>>(text: T, case: LetterCase) -> Result<Vec<u8>> {
    Decoder::new().case(case).decode(text)
}

/// Decode text with `delimiter_len` characters between octets, accepting either case.
///
/// A zero length, or text of at most two characters, decodes as undelimited text.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode_delimited<T: AsRef<str>>(text: T, delimiter_len: usize) -> Result<Vec<u8>> {
    Decoder::new().delimiter_len(delimiter_len).decode(text)
}

/// Decode text with `delimiter_len` characters between octets whose digits must be of `case`.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode_delimited_with_case<T: AsRef<str>>(
    text: T,
    case: LetterCase,
    delimiter_len: usize,
) -> Result<Vec<u8>> {
    Decoder::new()
        .case(case)
        .delimiter_len(delimiter_len)
        .decode(text)
}
