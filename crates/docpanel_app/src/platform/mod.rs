mod app;
mod config;
mod effects;
mod input;
mod logging;
mod persistence;
mod terminal;
mod ui;

pub use app::run_app;
pub use config::{load_config, DEFAULT_CONFIG_FILE};
