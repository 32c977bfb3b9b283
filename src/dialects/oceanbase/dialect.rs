use crate::dialects::base::DialectError;
use crate::dialects::defaults::PrefixMatcher;
use crate::dialects::descriptor::DialectDescriptor;
use crate::dialects::mysql::protocol::{
    ClientAttributes, MYSQL_DRIVER, MysqlProtocolDrivers, SecretsManagerGuard,
};

const SOURCE: &str = include_str!("dialect.toml");

pub const JDBC_URL_PREFIX: &str = "jdbc:oceanbase:";

/// OceanBase, claiming MySQL URLs too so it is tried before the generic MySQL dialect
pub struct OceanBaseDialect;

impl OceanBaseDialect {
    pub fn descriptor() -> Result<DialectDescriptor, DialectError> {
        let builder = DialectDescriptor::from_toml(SOURCE)?;
        let config = builder.config();

        let matcher = SecretsManagerGuard::new(PrefixMatcher::new(config.detection.url_prefixes.clone()));
        let drivers = MysqlProtocolDrivers::new(MYSQL_DRIVER, config.drivers.legacy.clone())
            .with_native(JDBC_URL_PREFIX, config.drivers.primary.clone());

        Ok(builder
            .url_matcher(matcher)
            .driver_resolver(drivers)
            .property_customizer(ClientAttributes)
            .build())
    }
}
