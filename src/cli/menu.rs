// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::{MultiSelect, Select, Text};

use super::handlers::generate_batch;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, GenerationRequest, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

const REGENERATE: &str = "🔁  Generate another";
const CHANGE_OPTIONS: &str = "⚙️  Change options";
const EXIT: &str = "❌  Exit";

/// Prompt-driven generator. Blocking; run it off the async runtime.
pub fn run_interactive(config: &Config) -> Result<()> {
    let generator = PasswordGenerator::new(config.character_sets());
    let mut request = prompt_options(&config.default_request())?;

    loop {
        match generate_batch(&generator, &request, 1) {
            Ok(mut results) => {
                if let Some(result) = results.pop() {
                    println!("\nGenerated Password: {}", style(&result.password).bold().green());
                    println!(
                        "Strength: {}/100, ~{} bits of entropy\n",
                        result.strength, result.entropy_bits
                    );
                }
            }
            Err(e) => {
                println!("❌ {}", e);
                request = prompt_options(&request)?;
                continue;
            }
        }

        let choice = Select::new("What next?", vec![REGENERATE, CHANGE_OPTIONS, EXIT])
            .with_help_message("Use arrow keys to navigate, Enter to select.")
            .prompt_skippable()?;

        match choice {
            Some(REGENERATE) => continue,
            Some(CHANGE_OPTIONS) => request = prompt_options(&request)?,
            _ => break,
        }
    }

    Ok(())
}

fn prompt_options(current: &GenerationRequest) -> Result<GenerationRequest> {
    let help = format!("Between {} and {} characters", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
    let length: i64 = Text::new("Password length:")
        .with_default(&current.length.to_string())
        .with_help_message(&help)
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))?;

    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| current.includes(**class))
        .map(|(i, _)| i)
        .collect();

    let selected = MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
        .with_default(&defaults)
        .with_help_message("Space to toggle, Enter to confirm")
        .prompt()?;

    Ok(GenerationRequest {
        length,
        include_uppercase: selected.contains(&CharacterClass::Uppercase),
        include_lowercase: selected.contains(&CharacterClass::Lowercase),
        include_numbers: selected.contains(&CharacterClass::Numbers),
        include_symbols: selected.contains(&CharacterClass::Symbols),
    })
}
