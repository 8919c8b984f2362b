// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::charset::DEFAULT_SYMBOLS;
use crate::generators::CharacterSets;
use crate::models::GenerationRequest;

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: i64,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub symbols: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = GenerationRequest::default();
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            default_password_length: defaults.length,
            default_include_uppercase: defaults.include_uppercase,
            default_include_lowercase: defaults.include_lowercase,
            default_include_numbers: defaults.include_numbers,
            default_include_symbols: defaults.include_symbols,
            symbols: DEFAULT_SYMBOLS.to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }
        parse_into(&lookup, "WEB_PORT", &mut config.web_port);

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase);
        parse_into(&lookup, "DEFAULT_INCLUDE_LOWERCASE", &mut config.default_include_lowercase);
        parse_into(&lookup, "DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers);
        parse_into(&lookup, "DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols);

        if let Some(symbols) = lookup("PASSWORD_SYMBOLS") {
            match CharacterSets::with_symbols(&symbols) {
                Ok(_) => config.symbols = symbols,
                Err(e) => log::warn!("Ignoring PASSWORD_SYMBOLS ({}), using defaults", e),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn character_sets(&self) -> CharacterSets {
        CharacterSets::with_symbols(&self.symbols).unwrap_or_default()
    }

    /// Request used when a caller leaves fields out
    pub fn default_request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}
