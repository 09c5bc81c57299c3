use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "dynamo-etl")]
#[command(about = "Fetch JSON records from an HTTP API and store them in a DynamoDB table")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "etl-config.toml")]
    pub config: String,

    /// Override an [api] setting, e.g. `endpoint=users` or `header.Authorization=Bearer x`
    #[arg(long = "set-api", value_name = "KEY=VALUE")]
    pub api_overrides: Vec<String>,

    /// Override an [aws] setting, e.g. `table_name=staging_records`
    #[arg(long = "set-aws", value_name = "KEY=VALUE")]
    pub aws_overrides: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Load and validate the configuration without fetching or writing
    #[arg(long)]
    pub dry_run: bool,
}
