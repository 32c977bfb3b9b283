use crate::cli::args::{Cli, Commands};
use crate::dialects::default_registry;
use crate::logger::setup_logger;
use crate::model::{Config, LoggingConfig};
use crate::orchestrator::{self, ProductInfo};
use log::{debug, error, info};

pub fn handle(cli: Cli) {
    // Load configuration
    let config = match Config::load(cli.config.as_deref(), cli.env.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            setup_logger(cli.verbose, &LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    setup_logger(cli.verbose, &config.logging);
    debug!("Loaded configuration: {:?}", config);

    let registry = match default_registry() {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to build dialect registry: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Resolve {
            url,
            product_name,
            product_version,
        } => {
            debug!("Running RESOLVE command");
            let final_url = url.or_else(|| config.database.url.clone()).unwrap_or_else(|| {
                error!("No JDBC URL provided via --url flag or config file");
                std::process::exit(1);
            });
            let product = product_name.map(|name| ProductInfo {
                name,
                version: product_version.unwrap_or_default(),
            });

            if let Err(e) = orchestrator::run_resolve(&registry, &config, &final_url, product) {
                error!("Resolve command failed: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Dialects => {
            debug!("Running DIALECTS command");
            orchestrator::run_list(&registry);
        }

        Commands::Split { file, dialect, url } => {
            debug!("Running SPLIT command");
            let final_url = url.or_else(|| {
                if dialect.is_none() {
                    config.database.url.clone()
                } else {
                    None
                }
            });

            if let Err(e) = orchestrator::run_split(
                &registry,
                &config.engine,
                &file,
                dialect.as_deref(),
                final_url.as_deref(),
            ) {
                error!("Split command failed: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Config { output, env } => {
            debug!("Running CONFIG command");

            match Config::generate_default_config(&output) {
                Ok(()) => {
                    info!("Generated default configuration file: {}", output);
                    if let Some(env_name) = env {
                        let env_path = format!("config/{}.toml", env_name);
                        match std::fs::create_dir_all("config") {
                            Ok(()) => match Config::generate_default_config(&env_path) {
                                Ok(()) => info!("Generated environment configuration file: {}", env_path),
                                Err(e) => error!("Failed to create environment config: {}", e),
                            },
                            Err(e) => error!("Failed to create config directory: {}", e),
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to generate configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
