//! Conversions between byte sequences and hexadecimal text.
//!
//! Encoding writes each octet as its high digit followed by its low digit, optionally with
//! a delimiter between octets. Fixed-width numbers are split into octets in an explicit
//! [`ByteOrder`]; floats are encoded through their raw bit pattern.
//!
//! Decoding accepts either an explicit [`LetterCase`] or, by default, digits of either case
//! (independently for every digit). Malformed input yields [`HexError::Malformed`], which
//! quotes the text around the fault; see [`set_context_radius`].
//!
//! ```
//! use hexstrings::{decode_delimited, encode_delimited, LetterCase};
//!
//! let text = encode_delimited(b"\x00\xff", LetterCase::Upper, ':');
//! assert_eq!(text, "00:FF");
//! assert_eq!(decode_delimited(&text, 1).unwrap(), [0x00, 0xFF]);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

mod byte_order;
mod context;
mod decode;
mod delimiter;
mod encode;
mod error;
mod letter_case;

pub use byte_order::ByteOrder;
pub use context::{context_radius, set_context_radius, DEFAULT_CONTEXT_RADIUS};
pub use decode::{decode, decode_delimited, decode_delimited_with_case, decode_with_case, Decoder};
pub use delimiter::{encoded_len, Delimiter};
pub use encode::{
    encode, encode_byte, encode_delimited, encode_range, encode_to_vec, encode_value, FixedWidth,
};
pub use error::{HexError, Result};
pub use letter_case::LetterCase;

/// Randomized checks of the encode/decode contract.
///
/// Inputs are random, so every property runs for a fixed number of rounds.
#[cfg(test)]
mod properties {
    use rand::{seq::SliceRandom, Rng};

    use crate::{
        decode, decode_delimited, decode_delimited_with_case, decode_with_case, encode,
        encode_delimited, encode_to_vec, encode_value, encoded_len, ByteOrder, Decoder,
        Delimiter, LetterCase,
    };

    const ROUNDS: usize = 500;
    const CASES: [LetterCase; 2] = [LetterCase::Lower, LetterCase::Upper];
    const DELIMITERS: &[Delimiter] = &[
        Delimiter::None,
        Delimiter::Str(""),
        Delimiter::Char(' '),
        Delimiter::Char('-'),
        Delimiter::Char(':'),
        Delimiter::Char('·'),
        Delimiter::Str(" "),
        Delimiter::Str(", "),
        Delimiter::Str(" | "),
        Delimiter::Str(" → "),
    ];

    fn gen_random_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|_| rand::thread_rng().gen()).collect()
    }

    #[test]
    fn round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let bytes = gen_random_bytes(rng.gen_range(0..64));
            for case in CASES {
                let text = encode(&bytes, case);
                assert_eq!(text.len(), 2 * bytes.len());
                assert_eq!(decode_with_case(&text, case).unwrap(), bytes);
                assert_eq!(decode(&text).unwrap(), bytes);
            }
        }
    }

    #[test]
    fn delimited_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let bytes = gen_random_bytes(rng.gen_range(0..64));
            let case = *CASES.choose(&mut rng).unwrap();
            let delimiter = *DELIMITERS.choose(&mut rng).unwrap();

            let text = encode_delimited(&bytes, case, delimiter);
            let chars = text.chars().count();
            assert_eq!(chars, encoded_len(bytes.len(), delimiter.len()));
            if !bytes.is_empty() {
                assert_eq!(
                    chars,
                    2 * bytes.len() + (bytes.len() - 1) * delimiter.len()
                );
            }

            assert_eq!(
                decode_delimited_with_case(&text, case, delimiter.len()).unwrap(),
                bytes,
                "{delimiter:?} {text:?}"
            );
            assert_eq!(decode_delimited(&text, delimiter.len()).unwrap(), bytes);
            assert_eq!(encode_to_vec(&bytes, case, delimiter), text.as_bytes());
        }
    }

    #[test]
    fn any_case_accepts_scrambled_case() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let bytes = gen_random_bytes(rng.gen_range(0..32));
            let scrambled: String = encode(&bytes, LetterCase::Lower)
                .chars()
                .map(|c| {
                    if rng.gen() {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            assert_eq!(decode(&scrambled).unwrap(), bytes, "{scrambled}");
            assert_eq!(
                Decoder::new().any_case().decode(&scrambled).unwrap(),
                bytes
            );
        }
    }

    #[test]
    fn odd_digit_count_is_rejected_at_end() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let bytes = gen_random_bytes(rng.gen_range(1..32));
            let mut text = encode(&bytes, LetterCase::Upper);
            text.pop();
            let err = decode(&text).unwrap_err();
            assert_eq!(err.position(), Some(text.len()));
        }
    }

    #[test]
    fn values_match_byte_encoding() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let value: u64 = rng.gen();
            let case = *CASES.choose(&mut rng).unwrap();

            assert_eq!(
                encode_value(value, case, ByteOrder::BigEndian, ':'),
                encode_delimited(value.to_be_bytes(), case, ':')
            );
            assert_eq!(
                encode_value(value, case, ByteOrder::LittleEndian, Delimiter::None),
                encode(value.to_le_bytes(), case)
            );

            let float = f64::from_bits(value);
            assert_eq!(
                encode_value(float, case, ByteOrder::BigEndian, " | "),
                encode_value(value, case, ByteOrder::BigEndian, " | ")
            );

            let half = u32::try_from(value >> 32).unwrap();
            let text = encode_value(half, case, ByteOrder::NATIVE, Delimiter::None);
            assert_eq!(decode(text).unwrap(), half.to_ne_bytes());
        }
    }
}
