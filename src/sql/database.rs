use crate::dialects::base::{DialectConfig, SqlConfig, TypeMappings};
use crate::model::EngineConfig;

/// Dialect-specific view of the target database used by the engine
#[derive(Debug, Clone)]
pub struct DialectDatabase {
    dialect: String,
    history_table: String,
    sql: SqlConfig,
    types: TypeMappings,
}

impl DialectDatabase {
    pub fn new(config: &DialectConfig, settings: &EngineConfig) -> Self {
        Self {
            dialect: config.metadata.name.clone(),
            history_table: settings.history_table.clone(),
            sql: config.sql.clone(),
            types: config.types.clone(),
        }
    }

    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// `java.sql.Types` code to bind NULL values with
    pub fn null_type(&self) -> i32 {
        self.sql.null_type
    }

    /// Quote an identifier according to dialect rules
    pub fn quote_identifier(&self, identifier: &str) -> String {
        let quote = &self.sql.quote_identifier;
        let escaped = identifier.replace(quote.as_str(), &self.sql.escape_identifier);
        format!("{}{}{}", quote, escaped, quote)
    }

    pub fn current_timestamp(&self) -> &str {
        &self.sql.current_timestamp
    }

    pub fn boolean_true(&self) -> &str {
        &self.sql.boolean_true
    }

    pub fn boolean_false(&self) -> &str {
        &self.sql.boolean_false
    }

    /// DDL for the schema history table
    pub fn create_history_table_sql(&self) -> String {
        let types = &self.types;
        format!(
            r#"CREATE TABLE {} (
    installed_rank INT NOT NULL PRIMARY KEY,
    version {},
    description {} NOT NULL,
    script {} NOT NULL,
    checksum {},
    installed_on {} DEFAULT {} NOT NULL,
    execution_time {} NOT NULL,
    success {} NOT NULL
)"#,
            self.quote_identifier(&self.history_table),
            types.version,
            types.description,
            types.script,
            types.checksum,
            types.installed_on,
            self.current_timestamp(),
            types.execution_time,
            types.success
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::dialects::MysqlDialect;
    use crate::model::EngineConfig;

    #[test]
    fn test_mysql_quoting_and_history_table() {
        let settings = EngineConfig {
            history_table: "flyway_history".to_string(),
            ..EngineConfig::default()
        };
        let database = MysqlDialect::descriptor().unwrap().create_database(&settings);

        assert_eq!(database.dialect(), "MySQL");
        assert_eq!(database.quote_identifier("order"), "`order`");
        assert_eq!(database.quote_identifier("a`b"), "`a``b`");
        assert_eq!(database.boolean_true(), "1");

        let ddl = database.create_history_table_sql();
        assert!(ddl.starts_with("CREATE TABLE `flyway_history`"));
        assert!(ddl.contains("success TINYINT(1) NOT NULL"));
    }
}
