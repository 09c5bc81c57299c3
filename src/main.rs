use clap::Parser;
use dynamo_etl::config::cli::LogFormat;
use dynamo_etl::config::parse_updates;
use dynamo_etl::utils::error::{EtlError, ErrorSeverity};
use dynamo_etl::utils::{logger, validation::Validate};
use dynamo_etl::{
    ApiFetcher, CliArgs, DataPipeline, DynamoDbWriter, EtlConfig, Result, TableSink,
};

fn load_config(args: &CliArgs) -> Result<EtlConfig> {
    let mut config = EtlConfig::from_file(&args.config)?;

    if !args.api_overrides.is_empty() {
        config.api = config.api.with_updates(&parse_updates(&args.api_overrides)?)?;
        tracing::info!("🔧 Applied {} api overrides", args.api_overrides.len());
    }
    if !args.aws_overrides.is_empty() {
        config.aws = config.aws.with_updates(&parse_updates(&args.aws_overrides)?)?;
        tracing::info!("🔧 Applied {} aws overrides", args.aws_overrides.len());
    }

    config.validate()?;
    Ok(config)
}

async fn run(config: EtlConfig) -> Result<()> {
    let writer = DynamoDbWriter::from_config(&config.aws).await;
    let fetcher = ApiFetcher::new(config.api);
    let sink = TableSink::new(config.aws, writer);

    DataPipeline::new(fetcher, sink).run().await
}

fn exit_code(e: &EtlError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("🚀 Starting dynamo-etl");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    tracing::info!("🌐 Source: {}", config.api.full_url());
    tracing::info!("🗄️  Target: {}", config.aws.target_display());
    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - configuration is valid, nothing fetched or written");
        return;
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ ETL run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
        return;
    }

    tracing::info!("✅ ETL run completed successfully");
    println!("✅ ETL run completed successfully");
}
