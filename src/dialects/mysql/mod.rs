mod dialect;
pub mod protocol;

pub use dialect::MysqlDialect;
