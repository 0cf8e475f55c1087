use clap::Parser;
use runtime_status::utils::{logger, validation::Validate};
use runtime_status::{
    BuiltinCatalog, CatalogSource, CliConfig, FileCatalog, StatusError, StatusReporter, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定檔 (可選)
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 設定檔的值在合併後才驗證，命令列可覆蓋
    let settings = cli.merge(file_config.as_ref());

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());

    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let source: Box<dyn CatalogSource> = match &settings.catalog_path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(BuiltinCatalog::new()),
    };

    let reporter = StatusReporter::new(source).with_strict_paths(settings.strict_paths);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = reporter.report(&settings.run, &mut out).await {
        fail(&e);
    }

    Ok(())
}

fn fail(e: &StatusError) -> ! {
    logger::log_failure(e);

    let exit_code = e.exit_code();
    if exit_code > 0 {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
    }

    std::process::exit(exit_code);
}
