use std::path::PathBuf;

mod platform;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(platform::DEFAULT_CONFIG_FILE));
    let config = platform::load_config(&config_path)?;
    platform::run_app(config).await
}
