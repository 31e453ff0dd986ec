use clap::Parser;
use mower_kata::utils::logger;
use mower_kata::{run_mower_kata, CliConfig, KataError, StreamWriter};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting mower-kata");
    tracing::debug!("CLI config: {:?}", config);

    let code = match run(&config).await {
        Ok(()) => 0,
        Err(e) => {
            // 診斷訊息已寫到 stderr，這裡只記錄在 info 層級
            tracing::info!(
                "❌ Run failed: {} (Category: {:?}, exit code {})",
                e,
                e.category(),
                e.exit_code()
            );
            tracing::info!("💡 Suggestion: {}", e.recovery_suggestion());
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(config: &CliConfig) -> Result<(), KataError> {
    // 驗證配置
    let path = match config.input_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            return Err(e);
        }
    };

    let result = run_mower_kata(
        path,
        config.format,
        StreamWriter::stdout(),
        StreamWriter::stderr(),
    )
    .await;

    match result {
        Ok(summary) => {
            tracing::info!("✅ {} mowers processed", summary.reports.len());
            Ok(())
        }
        // 輸入與解析錯誤已經寫到 stderr
        Err(e @ (KataError::Parse(_)
        | KataError::FileDoesNotExist { .. }
        | KataError::FileNotReadable { .. })) => Err(e),
        Err(e) => {
            eprintln!("An unexpected error occurred: {}", e);
            Err(e)
        }
    }
}
