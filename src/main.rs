use omi_config_validator::shared::LoggingUtils;
use omi_config_validator::{AppConfig, AppError, ConfigValidator};
use anyhow::Context;
use tracing::{error, info};

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = LoggingUtils::initialize(&config.logging.level, &config.logging.format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        match e.downcast_ref::<AppError>() {
            Some(AppError::InvalidOmiConfig(errs)) => {
                error!(error_count = errs.len(), "OMI configuration is invalid");
                for err in errs {
                    eprintln!("* {}", err);
                }
            }
            _ => error!("Validation failed: {:#}", e),
        }
        std::process::exit(1);
    }
}

/// Load from the file given as first argument, or the default sources
fn load_config() -> omi_config_validator::Result<AppConfig> {
    match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn run(mut config: AppConfig) -> anyhow::Result<()> {
    ConfigValidator::validate_config(&mut config)?;
    info!(
        omi_name = %config.omi.name,
        regions = ?config.omi.regions,
        "OMI configuration is valid"
    );

    let normalized = serde_json::to_string_pretty(&config.omi)
        .context("Failed to serialize normalized OMI configuration")?;
    println!("{}", normalized);
    Ok(())
}
