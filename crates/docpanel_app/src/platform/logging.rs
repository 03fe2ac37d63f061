//! Platform logging initialization for docpanel.
//!
//! The terminal belongs to the UI, so log output only goes to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Installs a file logger at `path`. When the file cannot be created the
/// panel runs without logging; the failure is reported on stderr before the
/// terminal is taken over.
pub fn initialize(path: &Path, level: LevelFilter) {
    let Some(file_logger) = create_file_logger(path, level, build_config()) else {
        return;
    };
    let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];
    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
