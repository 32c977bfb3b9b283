use crate::dialects::{
    ClassLoadingContext, ConnectionHandle, ConnectionProperties, DialectError, DialectRegistry,
};
use crate::sql::ExecutionError;
use log::{debug, info, warn};

/// Product metadata reported by a live connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub name: String,
    pub version: String,
}

impl ConnectionHandle for ProductInfo {}

/// Everything the engine needs to open a connection for a URL
#[derive(Debug, Clone)]
pub struct ConnectionPlan {
    /// Dialect chosen from the URL
    pub url_dialect: String,
    /// Dialect used from here on; differs from `url_dialect` when the
    /// live connection reports another product
    pub dialect: String,
    /// URL with any embedded password masked
    pub redacted_url: String,
    pub driver: String,
    pub used_backup_driver: bool,
    pub properties: ConnectionProperties,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Dialect(#[from] DialectError),

    #[error("Unable to load driver '{driver}' for dialect {dialect}{}", guidance_suffix(.guidance))]
    DriverLoad {
        dialect: String,
        driver: String,
        guidance: Option<String>,
    },

    #[error("Failed to read script '{0}': {1}")]
    ScriptRead(String, String),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

fn guidance_suffix(guidance: &Option<String>) -> String {
    match guidance {
        Some(text) => format!(". {}", text),
        None => String::new(),
    }
}

/// Resolve the dialect for `url`, pick a loadable driver and default
/// properties, then let the live product metadata confirm or override the
/// dialect.
pub fn plan_connection(
    registry: &DialectRegistry,
    url: &str,
    classes: &dyn ClassLoadingContext,
    product: Option<&ProductInfo>,
) -> Result<ConnectionPlan, EngineError> {
    let dialect = registry.resolve_by_url(url)?;
    let redacted_url = dialect.redact_url(url);
    debug!("Planning connection to {} with dialect {}", redacted_url, dialect.name());

    let primary = dialect.driver_class(url);
    let (driver, used_backup_driver) = if classes.is_present(&primary) {
        (primary, false)
    } else {
        match dialect.backup_driver_class(url, classes) {
            Some(backup) if classes.is_present(&backup) => {
                warn!("Driver {} not found, falling back to {}", primary, backup);
                (backup, true)
            }
            _ => {
                return Err(EngineError::DriverLoad {
                    dialect: dialect.name().to_string(),
                    driver: primary,
                    guidance: dialect.driver_guidance().map(str::to_string),
                });
            }
        }
    };

    let mut properties = ConnectionProperties::new();
    dialect.apply_connection_properties(url, &mut properties, classes);

    let mut final_dialect = dialect.name().to_string();
    if let Some(product) = product {
        let confirmed = registry.resolve_by_product(&product.name, &product.version, product)?;
        if confirmed.name() != dialect.name() {
            info!(
                "Connection reports {} {}; switching dialect from {} to {}",
                product.name,
                product.version,
                dialect.name(),
                confirmed.name()
            );
        }
        final_dialect = confirmed.name().to_string();
    }

    Ok(ConnectionPlan {
        url_dialect: dialect.name().to_string(),
        dialect: final_dialect,
        redacted_url,
        driver,
        used_backup_driver,
        properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::{DriverCatalog, default_registry};

    #[test]
    fn test_plan_with_primary_driver() {
        let registry = default_registry().unwrap();
        let catalog = DriverCatalog::new(["dm.jdbc.driver.DmDriver"]);

        let plan = plan_connection(&registry, "jdbc:dm:scott/tiger@db:5236", &catalog, None).unwrap();
        assert_eq!(plan.dialect, "DM");
        assert_eq!(plan.driver, "dm.jdbc.driver.DmDriver");
        assert!(!plan.used_backup_driver);
        assert_eq!(plan.redacted_url, "jdbc:dm:scott/********@db:5236");
        assert!(plan.properties.is_empty());
    }

    #[test]
    fn test_plan_falls_back_to_legacy_driver() {
        let registry = default_registry().unwrap();
        let catalog = DriverCatalog::new(["com.alipay.oceanbase.jdbc.Driver"]);

        let plan = plan_connection(&registry, "jdbc:oceanbase://db:2881/app", &catalog, None).unwrap();
        assert_eq!(plan.driver, "com.alipay.oceanbase.jdbc.Driver");
        assert!(plan.used_backup_driver);
        assert!(plan.properties.contains_key("connectionAttributes"));
    }

    #[test]
    fn test_plan_reports_missing_driver_with_guidance() {
        let registry = default_registry().unwrap();
        let err = plan_connection(&registry, "jdbc:mysql://db/app", &DriverCatalog::default(), None)
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("com.mysql.cj.jdbc.Driver"));
        assert!(message.contains("connector/j"));
    }

    #[test]
    fn test_plan_switches_dialect_on_product() {
        let registry = default_registry().unwrap();
        let catalog = DriverCatalog::new(["com.mysql.cj.jdbc.Driver"]);
        let product = ProductInfo {
            name: "MySQL".to_string(),
            version: "8.0.36".to_string(),
        };

        let plan = plan_connection(&registry, "jdbc:mysql://db/app", &catalog, Some(&product)).unwrap();
        assert_eq!(plan.url_dialect, "OceanBase");
        assert_eq!(plan.dialect, "MySQL");
    }

    #[test]
    fn test_plan_propagates_edition_error() {
        let registry = default_registry().unwrap();
        let err = plan_connection(
            &registry,
            "jdbc-secretsmanager:mysql://db/app",
            &|_: &str| true,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Dialect(DialectError::EditionUpgradeRequired { .. })
        ));
    }
}
