use super::protocol::{ClientAttributes, MysqlProtocolDrivers, SecretsManagerGuard};
use crate::dialects::base::DialectError;
use crate::dialects::defaults::PrefixMatcher;
use crate::dialects::descriptor::DialectDescriptor;

const SOURCE: &str = include_str!("dialect.toml");

/// Generic MySQL dialect, shadowed on URLs by more specific wire-compatible dialects
pub struct MysqlDialect;

impl MysqlDialect {
    pub fn descriptor() -> Result<DialectDescriptor, DialectError> {
        let builder = DialectDescriptor::from_toml(SOURCE)?;
        let config = builder.config();

        let matcher = SecretsManagerGuard::new(PrefixMatcher::new(config.detection.url_prefixes.clone()));
        let drivers = MysqlProtocolDrivers::new(config.drivers.primary.clone(), config.drivers.legacy.clone());

        Ok(builder
            .url_matcher(matcher)
            .driver_resolver(drivers)
            .property_customizer(ClientAttributes)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_descriptor() {
        let mysql = MysqlDialect::descriptor().unwrap();
        assert_eq!(mysql.name(), "MySQL");
        assert_eq!(mysql.priority(), 0);
        assert!(mysql.claims_url("jdbc:mysql://host/db").unwrap());
        assert!(mysql.claims_url("jdbc:google:mysql://project:instance/db").unwrap());
        assert!(!mysql.claims_url("jdbc:oceanbase://host/db").unwrap());
        assert_eq!(mysql.driver_class("jdbc:mysql://host/db"), "com.mysql.cj.jdbc.Driver");
    }

    #[test]
    fn test_mariadb_backup_driver() {
        let mysql = MysqlDialect::descriptor().unwrap();
        let mariadb_only = |class: &str| class == "org.mariadb.jdbc.Driver";
        assert_eq!(
            mysql.backup_driver_class("jdbc:mysql://host/db", &mariadb_only),
            Some("org.mariadb.jdbc.Driver".to_string())
        );
    }
}
