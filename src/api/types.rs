// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::crypto;
use crate::models::{GeneratedPassword, GenerationRequest};

/// Body of `POST /api/generate-password`. Omitted fields take the configured defaults.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePasswordRequest {
    /// Password length, 6 to 32
    #[schema(example = 12)]
    pub length: Option<i64>,
    /// Include uppercase letters A-Z
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters a-z
    pub include_lowercase: Option<bool>,
    /// Include digits 0-9
    pub include_numbers: Option<bool>,
    /// Include special characters
    pub include_symbols: Option<bool>,
}

impl GeneratePasswordRequest {
    pub fn into_request(self, defaults: &GenerationRequest) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePasswordResponse {
    /// Generated password
    pub password: String,
    /// Length in characters
    pub length: usize,
    /// Password strength score (0-100)
    pub strength: u8,
    /// Estimated entropy in bits
    pub entropy_bits: f64,
}

impl GeneratePasswordResponse {
    pub fn new(password: GeneratedPassword, pool_size: usize) -> Self {
        let length = password.len();
        Self {
            strength: crypto::analyze_password_strength(password.as_str()),
            entropy_bits: crypto::estimate_entropy_bits(length, pool_size),
            length,
            password: password.into_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// INVALID_LENGTH, NO_CHARACTER_CLASS_SELECTED, MALFORMED_REQUEST or INTERNAL_ERROR
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
