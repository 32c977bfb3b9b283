pub mod config;

pub use config::{Config, ConfigError, DatabaseConfig, DriversConfig, EngineConfig, LoggingConfig};
