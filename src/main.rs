//! constellation-cost - costs the mission request named by configuration
//! and writes the cost report.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use constellation_cost::adapters::FileDocumentStorage;
use constellation_cost::application::{EstimateCostCommand, EstimateCostHandler};
use constellation_cost::config::{AppConfig, LoggingConfig};

/// Installs the global subscriber. `RUST_LOG` overrides the configured
/// filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let layer = if logging.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .boxed()
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("constellation-cost: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "invalid configuration");
        return ExitCode::FAILURE;
    }

    let storage = Arc::new(FileDocumentStorage::new().with_pretty(config.io.pretty));
    let handler = EstimateCostHandler::new(storage.clone(), storage);

    let cmd = EstimateCostCommand {
        input: config.io.input(),
        output: config.io.output(),
        strict: config.features.strict_diagnostics,
    };

    match handler.handle(cmd).await {
        Ok(result) => {
            for diagnostic in result.diagnostics.iter() {
                tracing::debug!(run_id = %result.run_id, %diagnostic, "resolved to default");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "estimate failed");
            ExitCode::FAILURE
        }
    }
}
