use clap::Parser;
use text_toolkit::core::Storage;
use text_toolkit::utils::{logger, validation::Validate};
use text_toolkit::{
    CliConfig, Inspector, LocalStorage, ReversalPipeline, TomlConfig, TransformEngine,
};

const SAMPLE_CONTENT: &str = "This is a test file.\nIt contains some text.\nHello Rust!\n";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting text-toolkit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut monitor_enabled = config.monitor;
    let mut seed_sample = !config.keep_input;
    let mut inspect_enabled = !config.skip_inspect;

    // 載入 TOML 配置（若有指定）
    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file_config) => {
                if let Err(e) = file_config.validate() {
                    tracing::error!("❌ Configuration validation failed: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
                config.input_path = file_config.transform.input_path.clone();
                config.output_path = file_config.transform.output_path.clone();
                seed_sample = file_config.seed_sample() && !config.keep_input;
                inspect_enabled = file_config.inspect_enabled() && !config.skip_inspect;
                monitor_enabled = monitor_enabled || file_config.monitoring_enabled();
                tracing::info!("📁 Loaded configuration from: {}", path);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".".to_string());

    // 建立範例輸入檔；建立失敗是唯一直接終止的情況
    if seed_sample {
        if let Err(e) = storage
            .write_file(&config.input_path, SAMPLE_CONTENT.as_bytes())
            .await
        {
            tracing::error!("❌ Failed to create sample input file: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        println!("Created test input file: {}", config.input_path);
    }

    // 創建存儲和管道
    let pipeline = ReversalPipeline::new(storage.clone(), config.clone());

    // 創建引擎並運行；轉換失敗不會中止程式
    let engine = TransformEngine::new_with_monitoring(pipeline, monitor_enabled);
    if engine.execute().await {
        println!("✅ Transform completed successfully!");
    }

    // 互動式檔案檢視
    if inspect_enabled {
        println!("\nStarting file inspection...");
        let mut inspector = Inspector::new(LocalStorage::new(".".to_string()));
        if let Err(e) = inspector.run().await {
            tracing::error!("❌ Console error: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
        }
    }

    Ok(())
}
