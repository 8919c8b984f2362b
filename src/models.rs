// src/models.rs
use std::fmt;

use serde::{Serialize, Deserialize};

/// Shortest password the generator will build
pub const MIN_PASSWORD_LENGTH: i64 = 6;
/// Longest password the generator will build
pub const MAX_PASSWORD_LENGTH: i64 = 32;

/// One toggleable alphabet. Variant order is the canonical generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase Letters",
            CharacterClass::Lowercase => "Lowercase Letters",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Special Characters",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Password generation options, as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: i64,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

impl GenerationRequest {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in canonical order
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

/// A request that passed validation.
///
/// Only `PasswordGenerator::validate` builds one, so holding a `ValidRequest`
/// means the length is in range and at least one class is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    length: usize,
    classes: Vec<CharacterClass>,
}

impl ValidRequest {
    pub(crate) fn new(length: usize, classes: Vec<CharacterClass>) -> Self {
        Self { length, classes }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }
}

/// A freshly generated password. `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars redacted>)", self.len())
    }
}
