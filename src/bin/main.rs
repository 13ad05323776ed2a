use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use tsconvert::cli::Cli;
use tsconvert::config::{init_config, LogConfig};
use tsconvert::resolver::{RawRequest, ResolveError, Resolver};

fn main() -> ExitCode {
    // 解析命令行參數，無效參數由 clap 以狀態碼 2 結束
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("tsconvert: error: {:#}", err);
            let code = err
                .downcast_ref::<ResolveError>()
                .map(ResolveError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 初始化配置
    let app_config = init_config().context("無法加載配置")?;

    // 初始化日誌系統
    init_logging(&app_config.log)?;

    let request = RawRequest::from(cli);
    debug!(?request, "收到轉換請求");

    let resolved = Resolver::default()
        .with_default_selector(app_config.defaults.precision.as_str())
        .resolve(&request)?;

    print!("{}", resolved);
    Ok(())
}

// 初始化日誌系統，輸出到 stderr，stdout 只保留轉換結果
fn init_logging(log_config: &LogConfig) -> Result<()> {
    let level = match log_config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN, // 默認為WARN
    };

    // RUST_LOG 優先於配置檔
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match log_config.format.to_lowercase().as_str() {
        "full" => builder.try_init(),
        _ => builder.compact().try_init(),
    };
    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    debug!("日誌系統初始化完成");
    Ok(())
}
