// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger. Call once, before anything logs.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = builder(config.log_level);

    if let Some(path) = &config.log_file {
        builder.target(Target::Pipe(Box::new(open_log_file(path)?)));
    } else {
        builder.target(Target::Stderr);
    }

    builder.try_init()?;
    Ok(())
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        // actix logs every connection at debug
        .filter_module("actix_server", level.min(LevelFilter::Info))
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);
    builder
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}
