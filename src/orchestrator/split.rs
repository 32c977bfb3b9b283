use crate::dialects::{DialectDescriptor, DialectRegistry};
use crate::model::EngineConfig;
use crate::orchestrator::plan::EngineError;
use crate::sql::{QueryOutcome, StatementSink};
use log::info;
use std::fs;

/// Pick the dialect named explicitly, otherwise the one claiming `url`
pub fn select_dialect<'r>(
    registry: &'r DialectRegistry,
    dialect: Option<&str>,
    url: Option<&str>,
) -> Result<&'r DialectDescriptor, EngineError> {
    if let Some(name) = dialect {
        return registry
            .get(name)
            .ok_or_else(|| EngineError::UnknownDialect(name.to_string()));
    }
    match url {
        Some(url) => Ok(registry.resolve_by_url(url)?),
        None => Err(EngineError::UnknownDialect(
            "no --dialect or URL given".to_string(),
        )),
    }
}

/// Prints statements instead of sending them to a database
#[derive(Debug, Default)]
pub struct DryRunSink {
    pub printed: usize,
}

impl StatementSink for DryRunSink {
    fn execute(&mut self, sql: &str) -> Result<QueryOutcome, String> {
        self.printed += 1;
        println!("--- statement {}", self.printed);
        println!("{}", sql);
        Ok(QueryOutcome::Updated(0))
    }

    fn execute_batch(&mut self, statements: &[&str]) -> Result<u64, String> {
        println!("=== batch of {}", statements.len());
        for sql in statements {
            self.execute(sql)?;
        }
        Ok(0)
    }
}

pub fn run_split(
    registry: &DialectRegistry,
    settings: &EngineConfig,
    file: &str,
    dialect: Option<&str>,
    url: Option<&str>,
) -> Result<(), EngineError> {
    let descriptor = select_dialect(registry, dialect, url)?;
    info!("Splitting {} using dialect {}", file, descriptor.name());

    let script = fs::read_to_string(file)
        .map_err(|e| EngineError::ScriptRead(file.to_string(), e.to_string()))?;

    println!("📄 {} (dialect {})", file, descriptor.name());
    let mut sink = DryRunSink::default();
    let summary = descriptor
        .create_script_executor(settings)
        .execute(&mut sink, &script)?;

    println!("✅ {} statements", summary.statements);
    Ok(())
}
