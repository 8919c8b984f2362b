// src/generators/charset.rs
use std::collections::HashSet;

use crate::models::CharacterClass;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Alphabets used by the generator, one per character class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSets {
    symbols: Vec<char>,
}

impl Default for CharacterSets {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl CharacterSets {
    /// Build a table with a custom symbol alphabet.
    ///
    /// The symbol alphabet must be non-empty printable ASCII punctuation with no
    /// repeats, so that every symbol belongs to exactly one class.
    pub fn with_symbols(symbols: &str) -> Result<Self, String> {
        validate_symbols(symbols)?;
        Ok(Self {
            symbols: symbols.chars().collect(),
        })
    }

    pub fn alphabet(&self, class: CharacterClass) -> Vec<char> {
        match class {
            CharacterClass::Uppercase => UPPERCASE.chars().collect(),
            CharacterClass::Lowercase => LOWERCASE.chars().collect(),
            CharacterClass::Numbers => NUMBERS.chars().collect(),
            CharacterClass::Symbols => self.symbols.clone(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Which class a character belongs to, if any
    pub fn class_of(&self, c: char) -> Option<CharacterClass> {
        if c.is_ascii_uppercase() {
            Some(CharacterClass::Uppercase)
        } else if c.is_ascii_lowercase() {
            Some(CharacterClass::Lowercase)
        } else if c.is_ascii_digit() {
            Some(CharacterClass::Numbers)
        } else if self.symbols.contains(&c) {
            Some(CharacterClass::Symbols)
        } else {
            None
        }
    }
}

fn validate_symbols(symbols: &str) -> Result<(), String> {
    if symbols.is_empty() {
        return Err("symbol set is empty".to_string());
    }

    let mut seen = HashSet::new();
    for c in symbols.chars() {
        if !c.is_ascii_punctuation() {
            return Err(format!("'{}' is not ASCII punctuation", c.escape_default()));
        }
        if !seen.insert(c) {
            return Err(format!("'{}' appears more than once", c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_alphabet_sizes() {
        let sets = CharacterSets::default();
        assert_eq!(sets.alphabet(CharacterClass::Uppercase).len(), 26);
        assert_eq!(sets.alphabet(CharacterClass::Lowercase).len(), 26);
        assert_eq!(sets.alphabet(CharacterClass::Numbers).len(), 10);
        assert_eq!(sets.alphabet(CharacterClass::Symbols).len(), 26);
    }

    #[test]
    fn class_of_resolves_every_builtin_character() {
        let sets = CharacterSets::default();
        for class in CharacterClass::ALL {
            for c in sets.alphabet(class) {
                assert_eq!(sets.class_of(c), Some(class), "char {:?}", c);
            }
        }
        assert_eq!(sets.class_of(' '), None);
        assert_eq!(sets.class_of('~'), None);
    }

    #[test]
    fn custom_symbols_are_accepted() {
        let sets = CharacterSets::with_symbols("-_.~").unwrap();
        assert_eq!(sets.symbols(), &['-', '_', '.', '~']);
        assert_eq!(sets.class_of('~'), Some(CharacterClass::Symbols));
        assert_eq!(sets.class_of('!'), None);
    }

    #[test]
    fn bad_symbol_sets_are_rejected() {
        assert!(CharacterSets::with_symbols("").is_err());
        assert!(CharacterSets::with_symbols("!a").is_err());
        assert!(CharacterSets::with_symbols("!1").is_err());
        assert!(CharacterSets::with_symbols("! ").is_err());
        assert!(CharacterSets::with_symbols("!!").is_err());
        assert!(CharacterSets::with_symbols("!é").is_err());
    }
}
