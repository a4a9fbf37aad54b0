use clap::Parser;
use vacancy_stats::core::report;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{AppConfig, CliArgs, HttpVacancySource, StatsEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting vacancy-stats");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match AppConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    if e.is_config_error() {
                        eprintln!("💡 {}", e.recovery_suggestion());
                    } else {
                        eprintln!("💡 Make sure the file exists and is readable");
                    }
                    std::process::exit(1);
                }
            }
        }
        None => AppConfig::default(),
    };
    config.apply_overrides(args.languages.clone(), &args.sources, args.no_dedup);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    let engine = StatsEngine::new(&config);
    let mut reports = Vec::with_capacity(config.sources.len());

    for source_config in &config.sources {
        let source = match HttpVacancySource::new(source_config.clone()) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!("❌ Skipping {}: {}", source_config.title, e);
                eprintln!("❌ {}", e.user_friendly_message());
                continue;
            }
        };
        let source_report = engine.run(&source).await;

        // 表格模式逐一輸出，CSV/TSV 等全部收集完再輸出
        if args.format == report::OutputFormat::Table {
            println!(
                "{}",
                report::render(
                    std::slice::from_ref(&source_report),
                    config.report.zero_when_not_found,
                    args.format
                )?
            );
        }
        reports.push(source_report);
    }

    if args.format != report::OutputFormat::Table {
        print!(
            "{}",
            report::render(&reports, config.report.zero_when_not_found, args.format)?
        );
    }

    Ok(())
}

fn print_dry_run(config: &AppConfig) {
    println!("🔍 DRY RUN MODE - no requests will be made");
    println!("Languages: {}", config.languages.join(", "));
    println!(
        "Estimator: lower-only x{}, upper-only x{}",
        config.estimator.lower_only_multiplier, config.estimator.upper_only_multiplier
    );
    println!("Deduplicate: {}", config.aggregation.deduplicate);
    println!("Zero when not found: {}", config.report.zero_when_not_found);

    for source in &config.sources {
        println!();
        println!("{} ({})", source.title, source.kind);
        println!("  Endpoint: {}", source.endpoint);
        println!("  Query: {}", source.search_text("<language>"));
        println!("  Region: {}", source.region);
        if let Some(period) = source.period_days {
            println!("  Period: {} days", period);
        }
        println!("  Max pages: {}", source.max_pages);
        println!("  Currency: {}", source.currency);
        if source.kind.auth_header().is_some() {
            let key_state = if source.resolved_api_key().is_some() {
                "set"
            } else {
                "missing"
            };
            println!("  API key: {}", key_state);
        }
    }
}
