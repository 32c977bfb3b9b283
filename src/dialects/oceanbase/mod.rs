mod dialect;

pub use dialect::OceanBaseDialect;
