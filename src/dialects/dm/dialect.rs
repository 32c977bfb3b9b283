use crate::dialects::base::{ConnectionHandle, DialectError, ProductMatcher};
use crate::dialects::descriptor::DialectDescriptor;

const SOURCE: &str = include_str!("dialect.toml");

/// Dameng reports itself as `DM Database Server` and similar
#[derive(Debug, Clone, Copy, Default)]
pub struct DmProductMatcher;

impl ProductMatcher for DmProductMatcher {
    fn claims(&self, product_name: &str, _version: &str, _connection: &dyn ConnectionHandle) -> bool {
        product_name.starts_with("DM")
    }
}

pub struct DmDialect;

impl DmDialect {
    pub fn descriptor() -> Result<DialectDescriptor, DialectError> {
        Ok(DialectDescriptor::from_toml(SOURCE)?
            .product_matcher(DmProductMatcher)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EngineConfig;

    struct NoConnection;
    impl ConnectionHandle for NoConnection {}

    #[test]
    fn test_dm_url_and_driver() {
        let dm = DmDialect::descriptor().unwrap();
        let url = "jdbc:dm:user/pass@host:5236";
        assert!(dm.claims_url(url).unwrap());
        assert!(dm.claims_url("jdbc:dm://host:5236").unwrap());
        assert!(!dm.claims_url("jdbc:mysql://host/db").unwrap());
        assert_eq!(dm.driver_class(url), "dm.jdbc.driver.DmDriver");
    }

    #[test]
    fn test_dm_backup_driver_is_none() {
        let dm = DmDialect::descriptor().unwrap();
        let everything = |_: &str| true;
        assert_eq!(dm.backup_driver_class("jdbc:dm://host", &everything), None);
    }

    #[test]
    fn test_dm_product_matcher() {
        let dm = DmDialect::descriptor().unwrap();
        assert!(dm.claims_product("DM Database Server", "8.1", &NoConnection));
        assert!(!dm.claims_product("MySQL", "8.0", &NoConnection));
    }

    #[test]
    fn test_dm_credentials() {
        let dm = DmDialect::descriptor().unwrap();
        assert_eq!(dm.extract_password("jdbc:dm:scott/tiger@host:1521"), Some("tiger"));
        assert_eq!(dm.extract_password("jdbc:dm://host:1521"), None);
        assert_eq!(
            dm.redact_url("jdbc:dm:scott/tiger@host:1521"),
            "jdbc:dm:scott/********@host:1521"
        );
    }

    #[test]
    fn test_dm_no_default_properties() {
        let dm = DmDialect::descriptor().unwrap();
        let mut props = Default::default();
        dm.apply_connection_properties("jdbc:dm://host", &mut props, &|_: &str| true);
        assert!(props.is_empty());
    }

    #[test]
    fn test_dm_collaborators() {
        let dm = DmDialect::descriptor().unwrap();
        let database = dm.create_database(&EngineConfig::default());
        assert_eq!(database.null_type(), 12);
        assert_eq!(database.quote_identifier("my\"table"), "\"my\"\"table\"");
        assert!(database.create_history_table_sql().contains("DEFAULT SYSDATE"));

        let statements = dm
            .create_parser()
            .parse("BEGIN\n  NULL;\nEND;\n/\nSELECT 1;");
        assert_eq!(statements.len(), 2);
    }
}
