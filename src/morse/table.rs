//! The static Morse symbol table and its inverse.

use std::{collections::HashMap, sync::OnceLock};

/// Every supported character paired with its Morse code, in canonical order.
///
/// Only uppercase letters are present. The space character maps to a single space token.
pub static SYMBOL_TABLE: [(char, &str); 44] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (',', "--..--"),
    ('.', ".-.-.-"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('-', "-....-"),
    ('(', "-.--."),
    (')', "-.--.-"),
    (' ', " "),
];

/// Return the Morse code of `c`, if it has one.
pub fn lookup(c: char) -> Option<&'static str> {
    SYMBOL_TABLE
        .iter()
        .find_map(|&(symbol, code)| (symbol == c).then_some(code))
}

/// Return the character encoded by `code`, if any.
pub fn symbol(code: &str) -> Option<char> {
    inverse().get(code).copied()
}

/// Iterate over the table in canonical order.
pub fn symbols() -> impl Iterator<Item = (char, &'static str)> {
    SYMBOL_TABLE.iter().copied()
}

fn inverse() -> &'static HashMap<&'static str, char> {
    static INVERSE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    INVERSE.get_or_init(|| SYMBOL_TABLE.iter().map(|&(c, code)| (code, c)).collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{inverse, lookup, symbol, SYMBOL_TABLE};

    #[test]
    fn table_is_injective() {
        let codes: HashSet<_> = SYMBOL_TABLE.iter().map(|(_, code)| *code).collect();
        assert_eq!(codes.len(), SYMBOL_TABLE.len());
        assert_eq!(inverse().len(), SYMBOL_TABLE.len());
    }

    #[test]
    fn codes_are_dots_and_dashes() {
        for (c, code) in SYMBOL_TABLE {
            if c == ' ' {
                assert_eq!(code, " ");
            } else {
                assert!(code.chars().all(|s| s == '.' || s == '-'), "{c:?} -> {code:?}");
            }
        }
    }

    #[test]
    fn lookup_and_symbol_agree() {
        for (c, code) in SYMBOL_TABLE {
            assert_eq!(lookup(c), Some(code));
            assert_eq!(symbol(code), Some(c));
        }
        assert_eq!(lookup('a'), None);
        assert_eq!(symbol("........"), None);
    }
}
