//! Symbol codebooks: a Morse code translator and a one-hot category encoder.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod morse;
pub mod onehot;
pub mod value;

pub use error::ErrorKind;
