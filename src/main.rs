use clap::Parser;
use simple_ei::config::cli::{Cli, Command, OutputFormat};
use simple_ei::core::export::{payload_to_json, records_to_csv};
use simple_ei::utils::error::{EiError, ErrorSeverity};
use simple_ei::utils::{logger, validation::Validate};
use simple_ei::{server, AppConfig, Aggregator, HttpPageSource, RegionLookup};
use std::sync::Arc;

fn exit_code(e: &EiError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: EiError) -> ! {
    tracing::error!("❌ {} (code: {})", e, e.code());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    std::process::exit(exit_code(&e));
}

fn load_config(path: &str) -> Result<AppConfig, EiError> {
    let config = AppConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn build_aggregator(config: &AppConfig) -> Result<Aggregator<HttpPageSource>, EiError> {
    let source = HttpPageSource::new(config.request_timeout())?;
    Ok(Aggregator::new(source, config.scrape_settings()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Serve { json_logs: true, .. } => logger::init_json_logger(cli.verbose),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("📁 Loading configuration from: {}", cli.config);
    let mut config = load_config(&cli.config).unwrap_or_else(|e| fail(e));

    match cli.command {
        Command::Serve { port, .. } => {
            if let Some(port) = port {
                tracing::info!("🔧 Port overridden to: {}", port);
                config.application.port = port;
            }

            let aggregator = build_aggregator(&config).unwrap_or_else(|e| fail(e));
            tracing::info!(
                "🚀 Starting {} (concurrent sub-page fetches: {})",
                config.application.name,
                config.concurrent_requests()
            );

            let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
            server::serve(listener, Arc::new(aggregator)).await?;
        }
        Command::Lookup {
            postal_code,
            format,
        } => {
            let aggregator = build_aggregator(&config).unwrap_or_else(|e| fail(e));
            let payload = aggregator
                .process(&postal_code)
                .await
                .unwrap_or_else(|e| fail(e));

            let output = match format {
                OutputFormat::Json => payload_to_json(&payload),
                OutputFormat::Csv => records_to_csv(&payload.data),
            }
            .unwrap_or_else(|e| fail(e));
            print!("{}", output);
            if format == OutputFormat::Json {
                println!();
            }
        }
    }

    Ok(())
}
