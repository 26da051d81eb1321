//! Translation between text and International Morse code.
//!
//! Encoded messages are Morse codes separated by a single space. Every code comes from the fixed
//! [`SYMBOL_TABLE`], which covers uppercase letters, digits, a handful of punctuation marks and the
//! space character. Lowercase text must be uppercased by the caller.
//!
//! The space character encodes to a lone space token. Decoding splits on whitespace, which
//! swallows that token, so spaces do not survive a round trip:
//!
//! ```
//! use codebook::morse;
//!
//! let encoded = morse::encode("SOS 1").unwrap();
//! assert_eq!(encoded, "... --- ...   .----");
//! assert_eq!(morse::decode(&encoded).unwrap(), "SOS1");
//! ```

use tracing::{debug, instrument};

pub mod error;
pub mod table;

pub use error::MorseError;
pub use table::{lookup, symbol, symbols, SYMBOL_TABLE};

/// Encode `message` into Morse code.
#[instrument(level = "trace", skip(message), fields(len = message.len()))]
pub fn encode(message: &str) -> Result<String, MorseError> {
    encode_chars(message.chars())
}

/// Encode a sequence of characters into Morse code.
///
/// Codes are emitted in input order and joined by a single space.
pub fn encode_chars<I>(message: I) -> Result<String, MorseError>
where
    I: IntoIterator<Item = char>,
{
    let mut encoded = String::new();
    for (position, character) in message.into_iter().enumerate() {
        let Some(code) = lookup(character) else {
            debug!(?character, position, "no Morse code for character");
            return Err(MorseError::UnknownCharacter {
                character,
                position,
            });
        };
        if position > 0 {
            encoded.push(' ');
        }
        encoded.push_str(code);
    }
    Ok(encoded)
}

/// Decode a whitespace-separated Morse message.
///
/// Decoded characters are concatenated without a separator.
#[instrument(level = "trace", skip(morse), fields(len = morse.len()))]
pub fn decode(morse: &str) -> Result<String, MorseError> {
    morse
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            symbol(token).ok_or_else(|| {
                debug!(token, position, "unrecognized Morse token");
                MorseError::UnknownToken {
                    token: token.to_string(),
                    position,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, encode_chars, MorseError};
    use crate::error::ErrorKind;

    #[test]
    fn encode_joins_codes_with_single_space() {
        assert_eq!(encode("SOS").unwrap(), "... --- ...");
        assert_eq!(encode("E").unwrap(), ".");
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn encode_chars_accepts_any_sequence() {
        assert_eq!(encode_chars(['A', 'B']).unwrap(), ".- -...");
        assert_eq!(encode_chars(Vec::new()).unwrap(), "");
    }

    #[test]
    fn encode_rejects_lowercase() {
        let err = encode("Ab").unwrap_err();
        assert_eq!(
            err,
            MorseError::UnknownCharacter {
                character: 'b',
                position: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn decode_tolerates_surrounding_whitespace() {
        assert_eq!(decode("  .-\t-...\n").unwrap(), "AB");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn decode_reports_first_unknown_token() {
        let err = decode(".- #@!~ ???").unwrap_err();
        assert_eq!(
            err,
            MorseError::UnknownToken {
                token: "#@!~".to_string(),
                position: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn encoded_space_is_dropped_by_decode() {
        assert_eq!(encode(" ").unwrap(), " ");
        assert_eq!(decode(" ").unwrap(), "");
        assert_eq!(decode(&encode("A B").unwrap()).unwrap(), "AB");
    }
}
