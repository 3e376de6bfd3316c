//! Logging initialization for menu_app.
//!
//! The terminal belongs to the UI, so logs only go to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

pub fn initialize(log_path: &Path, level: LevelFilter) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if let Some(file_logger) = create_file_logger(log_path, level, build_config()) {
        loggers.push(file_logger);
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
