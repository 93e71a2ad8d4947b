use anyhow::Context;
use cds_client_util::utils::{logger, validation::Validate};
use cds_client_util::{CdsClientFactory, CliConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match config.loader().initialize(&CdsClientFactory) {
        Ok(client) => {
            tracing::info!("CDS API client ready for {}", client.url());
            println!("CDS API Client initialized successfully!");
        }
        Err(e) if e.is_recoverable() => {
            tracing::warn!("Could not initialize CDS client: {}", e);
            println!("Error: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "failed to initialize CDS client from {}",
                    config.cdsapirc.display()
                )
            });
        }
    }

    Ok(())
}
