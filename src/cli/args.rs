use clap::{Parser, Subcommand};

/// CLI entry point for dialect-dispatch
#[derive(Parser, Debug)]
#[command(
    name = "dialect-dispatch",
    version,
    about = "Resolve JDBC URLs to database dialects and drivers"
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Environment (loads config/{env}.toml)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the dialect and driver for a JDBC URL
    Resolve {
        /// JDBC URL (defaults to [database] url from config)
        #[arg(long)]
        url: Option<String>,

        /// Product name reported by the live connection
        #[arg(long)]
        product_name: Option<String>,

        /// Product version reported by the live connection
        #[arg(long, requires = "product_name")]
        product_version: Option<String>,
    },

    /// List registered dialects in resolution order
    Dialects,

    /// Split a SQL script into statements using a dialect's parser
    Split {
        /// SQL script to split
        #[arg(long)]
        file: String,

        /// Dialect name or engine alias
        #[arg(long, conflicts_with = "url")]
        dialect: Option<String>,

        /// JDBC URL used to pick the dialect
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate configuration file
    Config {
        /// Output path for config file
        #[arg(long, default_value = "config.toml")]
        output: String,

        /// Create environment-specific config
        #[arg(long)]
        env: Option<String>,
    },
}
