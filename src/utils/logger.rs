use crate::utils::error::{ErrorSeverity, StatusError};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 初始化 CLI 日誌。日誌一律寫到 stderr，stdout 只留給狀態報告。
pub fn init_cli_logger(verbose: bool, log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_directive(verbose, log_level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 低嚴重度 (例如下游關閉管道) 只記在 debug，不在預設過濾下輸出
pub fn failure_level(e: &StatusError) -> Level {
    match e.severity() {
        ErrorSeverity::Low => Level::DEBUG,
        _ => Level::ERROR,
    }
}

pub fn log_failure(e: &StatusError) {
    if failure_level(e) == Level::DEBUG {
        tracing::debug!("Status report stopped: {}", e);
    } else {
        tracing::error!(
            "❌ Status report failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    }
}

fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    if verbose {
        "runtime_status=debug,info".to_string()
    } else {
        format!(
            "runtime_status={}",
            log_level.unwrap_or(DEFAULT_LOG_LEVEL)
        )
    }
}
