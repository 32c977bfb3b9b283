use crate::dialects::classpath::ClassLoadingContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Static data describing a dialect, embedded per dialect as `dialect.toml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialectConfig {
    pub metadata: DialectMetadata,
    pub detection: DetectionConfig,
    pub drivers: DriverConfig,
    pub sql: SqlConfig,
    pub types: TypeMappings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialectMetadata {
    pub name: String,
    /// Higher priorities are consulted first during resolution
    #[serde(default)]
    pub priority: i32,
    /// Engine names served by this dialect, usable as lookup aliases
    #[serde(default)]
    pub engines: Vec<String>,
    pub description: String,
    pub min_version: Option<String>,
    pub max_version: Option<String>,
    /// Extra guidance shown when the native driver cannot be loaded
    pub driver_guidance: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    pub url_prefixes: Vec<String>,
    /// Regex with exactly one capture group: the password embedded in the URL
    pub credentials_pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriverConfig {
    pub primary: String,
    pub legacy: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqlConfig {
    pub quote_identifier: String,
    pub escape_identifier: String,
    pub current_timestamp: String,
    pub boolean_true: String,
    pub boolean_false: String,
    #[serde(default = "default_statement_delimiter")]
    pub statement_delimiter: String,
    /// Line that terminates a procedural block (e.g. `/`)
    pub block_terminator: Option<String>,
    /// `java.sql.Types` code used when binding NULL
    pub null_type: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeMappings {
    pub version: String,
    pub description: String,
    pub script: String,
    pub checksum: String,
    pub installed_on: String,
    pub execution_time: String,
    pub success: String,
}

fn default_statement_delimiter() -> String {
    ";".to_string()
}

/// Default connection properties handed to the driver
pub type ConnectionProperties = BTreeMap<String, String>;

/// Read-only view of a live connection, supplied by the engine
pub trait ConnectionHandle {
    fn server_variable(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Decides whether a dialect claims a JDBC URL.
///
/// Implementations are pure, except that they may refuse a URL they
/// recognise by returning [`DialectError::EditionUpgradeRequired`].
pub trait UrlMatcher: Send + Sync {
    fn claims(&self, url: &str) -> Result<bool, DialectError>;
}

/// Decides whether a dialect claims a live connection from its product metadata
pub trait ProductMatcher: Send + Sync {
    fn claims(
        &self,
        product_name: &str,
        product_version: &str,
        connection: &dyn ConnectionHandle,
    ) -> bool;
}

/// Picks the native driver identifier for a URL
pub trait DriverResolver: Send + Sync {
    fn driver_class(&self, url: &str) -> String;

    /// Alternate identifier to try when the primary one is not loadable.
    /// Returns `None` when there is nothing left to try.
    fn backup_driver_class(&self, url: &str, classes: &dyn ClassLoadingContext) -> Option<String>;
}

/// Injects default connection properties before the engine connects
pub trait ConnectionPropertyCustomizer: Send + Sync {
    fn apply(&self, url: &str, props: &mut ConnectionProperties, classes: &dyn ClassLoadingContext);
}

/// Product editions, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Community,
    Teams,
    Enterprise,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Community => write!(f, "Community"),
            Tier::Teams => write!(f, "Teams"),
            Tier::Enterprise => write!(f, "Enterprise"),
        }
    }
}

/// Error types for dialect operations
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("No dialect found to handle {0}")]
    NoDialectFound(String),

    #[error("'{feature}' requires the {tier} edition or above")]
    EditionUpgradeRequired { tier: Tier, feature: String },

    #[error("Dialect registered more than once: {0}")]
    DuplicateDialect(String),

    #[error("Invalid descriptor for dialect '{dialect}': {message}")]
    Descriptor { dialect: String, message: String },
}
