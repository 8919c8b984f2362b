// src/cli/handlers.rs
use anyhow::{Context, Result};
use console::style;

use super::commands::GenerateOptions;
use crate::api::types::GeneratePasswordResponse;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationRequest;

/// Validate once, then generate `count` passwords
pub fn generate_batch(
    generator: &PasswordGenerator,
    request: &GenerationRequest,
    count: u32,
) -> Result<Vec<GeneratePasswordResponse>> {
    let valid = generator.validate(request)?;
    let pool_size = generator.pool_size(&valid);

    (0..count)
        .map(|_| -> Result<GeneratePasswordResponse> {
            let password = generator.generate(&valid)?;
            Ok(GeneratePasswordResponse::new(password, pool_size))
        })
        .collect()
}

pub fn handle_generate(config: &Config, options: &GenerateOptions) -> Result<()> {
    let generator = PasswordGenerator::new(config.character_sets());
    let request = options.to_request(&config.default_request());
    let results = generate_batch(&generator, &request, options.count)?;

    if options.json {
        let rendered = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])
        } else {
            serde_json::to_string_pretty(&results)
        };
        println!("{}", rendered.context("Failed to encode passwords as JSON")?);
        return Ok(());
    }

    // Passwords on stdout, details on stderr so the output can be piped
    for result in &results {
        println!("{}", result.password);
        eprintln!(
            "{}",
            style(format!(
                "  strength {}/100, ~{} bits of entropy",
                result.strength, result.entropy_bits
            ))
            .dim()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn batch_returns_requested_count() {
        let generator = PasswordGenerator::default();
        let request = GenerationRequest {
            length: 8,
            ..GenerationRequest::default()
        };

        let results = generate_batch(&generator, &request, 5).unwrap();
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.password.chars().count() == 8 && r.length == 8));
    }

    #[test]
    fn batch_surfaces_validation_errors() {
        let generator = PasswordGenerator::default();
        let request = GenerationRequest {
            length: 40,
            ..GenerationRequest::default()
        };

        let err = generate_batch(&generator, &request, 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::InvalidLength { length: 40, .. })
        ));
    }

    #[test]
    fn options_fall_back_to_defaults() {
        let options = GenerateOptions {
            length: None,
            uppercase: Some(false),
            lowercase: None,
            numbers: None,
            symbols: Some(true),
            count: 1,
            json: false,
        };

        let request = options.to_request(&GenerationRequest::default());
        assert_eq!(request.length, 12);
        assert!(!request.include_uppercase);
        assert!(request.include_lowercase);
        assert!(request.include_numbers);
        assert!(request.include_symbols);
    }
}
