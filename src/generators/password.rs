// src/generators/password.rs
use log::error;

use super::{CharacterSets, GeneratorError, Result};
use crate::crypto::{self, SecureRandom};
use crate::models::{
    GeneratedPassword, GenerationRequest, ValidRequest, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

/// Builds passwords from validated requests.
///
/// Stateless apart from its alphabets, so one instance can be shared by every
/// worker. Randomness is supplied per call.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    sets: CharacterSets,
}

impl PasswordGenerator {
    pub fn new(sets: CharacterSets) -> Self {
        PasswordGenerator { sets }
    }

    pub fn character_sets(&self) -> &CharacterSets {
        &self.sets
    }

    /// Check length bounds and class selection. Length is checked first.
    pub fn validate(&self, request: &GenerationRequest) -> Result<ValidRequest> {
        if request.length < MIN_PASSWORD_LENGTH || request.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::invalid_length(request.length));
        }

        let classes = request.enabled_classes();
        if classes.is_empty() {
            return Err(GeneratorError::NoCharacterClassSelected);
        }

        let length = usize::try_from(request.length)
            .map_err(|_| GeneratorError::invalid_length(request.length))?;

        Ok(ValidRequest::new(length, classes))
    }

    /// Generate with the operating system CSPRNG
    pub fn generate(&self, request: &ValidRequest) -> Result<GeneratedPassword> {
        self.generate_with(request, &mut crypto::secure_rng())
    }

    /// Generate with a caller-supplied secure random source.
    pub fn generate_with<R: SecureRandom + ?Sized>(
        &self,
        request: &ValidRequest,
        rng: &mut R,
    ) -> Result<GeneratedPassword> {
        let length = request.length();
        let mut pool = Vec::new();
        let mut chars = Vec::with_capacity(length);

        // One required character per enabled class
        for class in request.classes() {
            let alphabet = self.sets.alphabet(*class);
            let c = crypto::pick(rng, &alphabet).ok_or_else(|| {
                violation(format!("alphabet for {} is empty", class))
            })?;
            chars.push(c);
            pool.extend(alphabet);
        }

        let filler = length.checked_sub(chars.len()).ok_or_else(|| {
            violation(format!(
                "{} required characters exceed requested length {}",
                chars.len(),
                length
            ))
        })?;

        for _ in 0..filler {
            let c = crypto::pick(rng, &pool)
                .ok_or_else(|| violation("combined pool is empty".to_string()))?;
            chars.push(c);
        }

        crypto::shuffle(rng, &mut chars);

        if chars.len() != length {
            return Err(violation(format!(
                "built {} characters for requested length {}",
                chars.len(),
                length
            )));
        }

        Ok(GeneratedPassword::new(chars.into_iter().collect()))
    }

    /// Size of the combined pool for a request, used for entropy estimates
    pub fn pool_size(&self, request: &ValidRequest) -> usize {
        request
            .classes()
            .iter()
            .map(|class| self.sets.alphabet(*class).len())
            .sum()
    }
}

fn violation(detail: String) -> GeneratorError {
    error!("Password generation invariant violated: {}", detail);
    GeneratorError::InternalInvariantViolation(detail)
}
