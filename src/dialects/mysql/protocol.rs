//! Hooks shared by every dialect that speaks the MySQL client protocol.

use crate::APPLICATION_NAME;
use crate::dialects::base::{
    ConnectionProperties, ConnectionPropertyCustomizer, DialectError, DriverResolver, Tier,
    UrlMatcher,
};
use crate::dialects::classpath::ClassLoadingContext;
use crate::dialects::defaults::legacy_or_default;

pub const MYSQL_PREFIX: &str = "jdbc:mysql:";
pub const P6SPY_PREFIXES: [&str; 2] = ["jdbc:p6spy:mysql:", "jdbc:p6spy:google:"];
pub const SECRETS_MANAGER_PREFIX: &str = "jdbc-secretsmanager:mysql:";

pub const MYSQL_DRIVER: &str = "com.mysql.cj.jdbc.Driver";
pub const P6SPY_DRIVER: &str = "com.p6spy.engine.spy.P6SpyDriver";
pub const GOOGLE_DRIVER: &str = "com.mysql.jdbc.GoogleDriver";

/// Refuses AWS Secrets Manager wrapped URLs, otherwise defers to `inner`
#[derive(Debug, Clone)]
pub struct SecretsManagerGuard<M> {
    inner: M,
}

impl<M> SecretsManagerGuard<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: UrlMatcher> UrlMatcher for SecretsManagerGuard<M> {
    fn claims(&self, url: &str) -> Result<bool, DialectError> {
        if url.starts_with(SECRETS_MANAGER_PREFIX) {
            return Err(DialectError::EditionUpgradeRequired {
                tier: Tier::Enterprise,
                feature: "jdbc-secretsmanager".to_string(),
            });
        }
        self.inner.claims(url)
    }
}

/// Driver selection across native, p6spy-wrapped, plain MySQL and
/// Google Cloud SQL URLs
#[derive(Debug, Clone)]
pub struct MysqlProtocolDrivers {
    native: Option<(String, String)>,
    mysql_driver: String,
    legacy: Option<String>,
}

impl MysqlProtocolDrivers {
    pub fn new(mysql_driver: impl Into<String>, legacy: Option<String>) -> Self {
        Self {
            native: None,
            mysql_driver: mysql_driver.into(),
            legacy,
        }
    }

    /// Serve `prefix` with a vendor driver ahead of the MySQL rules
    pub fn with_native(mut self, prefix: impl Into<String>, driver: impl Into<String>) -> Self {
        self.native = Some((prefix.into(), driver.into()));
        self
    }
}

impl DriverResolver for MysqlProtocolDrivers {
    fn driver_class(&self, url: &str) -> String {
        if let Some((prefix, driver)) = &self.native {
            if url.starts_with(prefix.as_str()) {
                return driver.clone();
            }
        }
        if P6SPY_PREFIXES.iter().any(|p| url.starts_with(p)) {
            return P6SPY_DRIVER.to_string();
        }
        if url.starts_with(MYSQL_PREFIX) {
            self.mysql_driver.clone()
        } else {
            GOOGLE_DRIVER.to_string()
        }
    }

    fn backup_driver_class(&self, url: &str, classes: &dyn ClassLoadingContext) -> Option<String> {
        legacy_or_default(self.legacy.as_deref(), url, classes)
    }
}

/// Identifies this tool to the server through `connectionAttributes`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientAttributes;

impl ConnectionPropertyCustomizer for ClientAttributes {
    fn apply(&self, _url: &str, props: &mut ConnectionProperties, _classes: &dyn ClassLoadingContext) {
        props.insert(
            "connectionAttributes".to_string(),
            format!("program_name:{}", APPLICATION_NAME),
        );
    }
}
