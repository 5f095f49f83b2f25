use env_logger::{Builder, WriteStyle};
use insomniac::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();

    // Initialise logger with the compiled-in log level
    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Always)
        .format_timestamp_secs()
        .init();

    insomniac::run(config).await
}
