use clap::Parser;
use person_directory::config::LogFormat;
use person_directory::utils::{logger, validation::Validate};
use person_directory::{app, AppState, CliArgs, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入配置（檔案 + 命令列覆蓋）
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(config.logging.verbose),
        LogFormat::Json => logger::init_json_logger(config.logging.verbose),
    }

    tracing::info!("Starting person-directory");
    tracing::debug!("Config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = match app::connect_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Could not open document store: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let server = Server::new(AppState::new(config, store))?;
    server.run().await?;

    Ok(())
}
