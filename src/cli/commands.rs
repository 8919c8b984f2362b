// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::models::GenerationRequest;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides WEB_PORT)
        #[arg(long, short)]
        port: Option<u16>,

        /// Address to bind (overrides WEB_ADDRESS)
        #[arg(long)]
        address: Option<String>,
    },

    /// Generate passwords and print them
    Generate(GenerateOptions),

    /// Choose options with interactive prompts
    Interactive,
}

/// Unset options fall back to the configured defaults.
#[derive(Args, Debug, Clone)]
pub struct GenerateOptions {
    /// Password length (6-32)
    #[arg(long, short, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Include uppercase letters
    #[arg(long, value_name = "BOOL")]
    pub uppercase: Option<bool>,

    /// Include lowercase letters
    #[arg(long, value_name = "BOOL")]
    pub lowercase: Option<bool>,

    /// Include numbers
    #[arg(long, value_name = "BOOL")]
    pub numbers: Option<bool>,

    /// Include special characters
    #[arg(long, value_name = "BOOL")]
    pub symbols: Option<bool>,

    /// How many passwords to generate
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub count: u32,

    /// Print JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

impl GenerateOptions {
    pub fn to_request(&self, defaults: &GenerationRequest) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: self.uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: self.numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.symbols.unwrap_or(defaults.include_symbols),
        }
    }
}
