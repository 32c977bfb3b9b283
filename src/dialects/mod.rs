//! Database dialect dispatch
//!
//! Each dialect is a [`DialectDescriptor`]: static data from an embedded
//! `dialect.toml` plus small capability hooks. The [`DialectRegistry`] picks
//! one descriptor for a JDBC URL or a live connection's product metadata.

pub mod base;
pub mod classpath;
pub mod defaults;
pub mod descriptor;
pub mod registry;

// Dialect modules
pub mod dm;
pub mod mysql;
pub mod oceanbase;

// Re-export main types
pub use base::{
    ConnectionHandle, ConnectionProperties, ConnectionPropertyCustomizer, DialectConfig,
    DialectError, DriverResolver, ProductMatcher, Tier, UrlMatcher,
};
pub use classpath::{ClassLoadingContext, DriverCatalog};
pub use descriptor::{DescriptorBuilder, DialectDescriptor};
pub use registry::DialectRegistry;

pub use dm::DmDialect;
pub use mysql::MysqlDialect;
pub use oceanbase::OceanBaseDialect;

/// Descriptors for every built-in dialect, in registration order
pub fn builtin_dialects() -> Result<Vec<DialectDescriptor>, DialectError> {
    Ok(vec![
        DmDialect::descriptor()?,
        OceanBaseDialect::descriptor()?,
        MysqlDialect::descriptor()?,
    ])
}

/// Registry with all built-in dialects
pub fn default_registry() -> Result<DialectRegistry, DialectError> {
    DialectRegistry::new(builtin_dialects()?)
}
