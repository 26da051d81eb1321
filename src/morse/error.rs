//! Defines Morse translation errors.

use thiserror::Error;

use crate::error::ErrorKind;

/// An error type for all Morse translations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MorseError {
    /// A character of the message has no Morse code.
    #[error("character {character:?} at position {position} has no Morse code")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Index of the character within the message.
        position: usize,
    },
    /// A token of the encoded message is not a Morse code.
    #[error("token {token:?} at position {position} is not a Morse code")]
    UnknownToken {
        /// The offending token.
        token: String,
        /// Index of the token within the encoded message.
        position: usize,
    },
    /// The input was not text.
    #[error("expected text, found {found}")]
    NotText {
        /// The kind of value that was supplied instead.
        found: &'static str,
    },
}

impl MorseError {
    /// Return the broad category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCharacter { .. } | Self::UnknownToken { .. } => ErrorKind::Lookup,
            Self::NotText { .. } => ErrorKind::Type,
        }
    }
}
