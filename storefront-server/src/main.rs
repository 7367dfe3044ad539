use storefront_server::utils::logger;
use storefront_server::{Config, Server};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    logger::init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    tracing::info!(
        environment = %config.environment,
        notify_lang = %config.notify_lang,
        "Starting storefront-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    Server::new(config).run().await?;
    Ok(())
}
