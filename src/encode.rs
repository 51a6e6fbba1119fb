//! Bytes and fixed-width values to hexadecimal text.
//!
//! Every shape funnels into one octet writer: each octet becomes its high digit followed by
//! its low digit, and the delimiter is written before every octet but the first. The
//! output buffer is sized exactly up front, so a call allocates once.

use crate::{
    byte_order::ByteOrder,
    delimiter::{encoded_len, Delimiter},
    error::{HexError, Result},
    letter_case::LetterCase,
};

fn write_octets(out: &mut String, bytes: &[u8], hex_chars: &[u8; 16], delimiter: Delimiter) {
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            delimiter.push_to(out);
        }
        out.push(char::from(hex_chars[usize::from(byte >> 4)]));
        out.push(char::from(hex_chars[usize::from(byte & 0x0F)]));
    }
}

fn encode_octets(bytes: &[u8], case: LetterCase, delimiter: Delimiter) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len(), delimiter.byte_len()));
    write_octets(&mut out, bytes, case.hex_chars(), delimiter);
    out
}

/// Encode all of `data` without delimiters.
///
/// ```
/// use hexstrings::{encode, LetterCase};
///
/// assert_eq!(encode([0xFF_u8, 0x0E], LetterCase::Upper), "FF0E");
/// ```
#[must_use]
pub fn encode<B: AsRef<[u8]>>(data: B, case: LetterCase) -> String {
    encode_octets(data.as_ref(), case, Delimiter::None)
}

/// Encode all of `data`, writing `delimiter` between adjacent octets.
///
/// ```
/// use hexstrings::{encode_delimited, LetterCase};
///
/// assert_eq!(encode_delimited(b"12Z", LetterCase::Lower, ':'), "31:32:5a");
/// assert_eq!(encode_delimited(b"12Z", LetterCase::Lower, ", "), "31, 32, 5a");
/// ```
#[must_use]
pub fn encode_delimited<'d, B, D>(data: B, case: LetterCase, delimiter: D) -> String
where
    B: AsRef<[u8]>,
    D: Into<Delimiter<'d>>,
{
    encode_octets(data.as_ref(), case, delimiter.into())
}

/// Encode `length` bytes of `data` starting at `offset`.
///
/// # Errors
///
/// Returns [`HexError::OutOfBounds`] if the window does not lie inside `data`.
pub fn encode_range<'d, B, D>(
    data: B,
    offset: usize,
    length: usize,
    case: LetterCase,
    delimiter: D,
) -> Result<String>
where
    B: AsRef<[u8]>,
    D: Into<Delimiter<'d>>,
{
    let data = data.as_ref();
    let window = offset
        .checked_add(length)
        .and_then(|end| data.get(offset..end))
        .ok_or(HexError::OutOfBounds {
            offset,
            length,
            available: data.len(),
        })?;
    Ok(encode_octets(window, case, delimiter.into()))
}

/// Like [`encode_delimited`], but returns the UTF-8 buffer instead of a `String`.
#[must_use]
pub fn encode_to_vec<'d, B, D>(data: B, case: LetterCase, delimiter: D) -> Vec<u8>
where
    B: AsRef<[u8]>,
    D: Into<Delimiter<'d>>,
{
    encode_octets(data.as_ref(), case, delimiter.into()).into_bytes()
}

/// Encode a single byte as two digits.
#[must_use]
pub fn encode_byte(byte: u8, case: LetterCase) -> String {
    encode_octets(&[byte], case, Delimiter::None)
}

/// A numeric primitive with a fixed number of octets.
///
/// Floating-point values contribute their raw IEEE-754 bit pattern, so NaN payloads and
/// the sign of zero survive encoding.
pub trait FixedWidth: Copy {
    type Octets: AsRef<[u8]>;

    /// Number of octets.
    const WIDTH: usize;

    /// The octets of `self` in the requested order.
    fn octets(self, order: ByteOrder) -> Self::Octets;
}

macro_rules! impl_fixed_width_int {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                type Octets = [u8; $width];
                const WIDTH: usize = $width;

                #[inline]
                fn octets(self, order: ByteOrder) -> Self::Octets {
                    match order {
                        ByteOrder::LittleEndian => self.to_le_bytes(),
                        ByteOrder::BigEndian => self.to_be_bytes(),
                    }
                }
            }
        )*
    };
}

impl_fixed_width_int! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
}

impl FixedWidth for f32 {
    type Octets = [u8; 4];
    const WIDTH: usize = 4;

    #[inline]
    fn octets(self, order: ByteOrder) -> Self::Octets {
        self.to_bits().octets(order)
    }
}

impl FixedWidth for f64 {
    type Octets = [u8; 8];
    const WIDTH: usize = 8;

    #[inline]
    fn octets(self, order: ByteOrder) -> Self::Octets {
        self.to_bits().octets(order)
    }
}

/// Encode a fixed-width value octet by octet in the given byte order.
///
/// ```
/// use hexstrings::{encode_value, ByteOrder, Delimiter, LetterCase};
///
/// let text = encode_value(0x1234_u16, LetterCase::Lower, ByteOrder::LittleEndian, Delimiter::None);
/// assert_eq!(text, "3412");
/// let text = encode_value(1.0_f32, LetterCase::Upper, ByteOrder::BigEndian, ' ');
/// assert_eq!(text, "3F 80 00 00");
/// ```
#[must_use]
pub fn encode_value<'d, T, D>(value: T, case: LetterCase, order: ByteOrder, delimiter: D) -> String
where
    T: FixedWidth,
    D: Into<Delimiter<'d>>,
{
    encode_octets(value.octets(order).as_ref(), case, delimiter.into())
}
