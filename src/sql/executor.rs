use crate::model::EngineConfig;
use crate::sql::parser::{SqlStatement, StatementKind, StatementParser};
use log::{debug, error, info};

/// Result of running one statement on the engine's connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Rows(Vec<Vec<String>>),
    Updated(u64),
}

/// The engine's live connection, as seen by the script executor
pub trait StatementSink {
    fn execute(&mut self, sql: &str) -> Result<QueryOutcome, String>;

    /// Run several statements as one batch, returning the total update count
    fn execute_batch(&mut self, statements: &[&str]) -> Result<u64, String> {
        let mut total = 0;
        for sql in statements {
            if let QueryOutcome::Updated(count) = self.execute(sql)? {
                total += count;
            }
        }
        Ok(total)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("Statement at line {line} failed: {message}")]
    StatementFailed { line: usize, message: String },

    #[error("Batch of {count} statements starting at line {line} failed: {message}")]
    BatchFailed {
        line: usize,
        count: usize,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub statements: usize,
    pub batches: usize,
    pub rows_affected: u64,
}

/// Runs a migration script statement by statement for one dialect
#[derive(Debug, Clone)]
pub struct ScriptExecutor {
    dialect: String,
    parser: StatementParser,
    undo: bool,
    batch: bool,
    output_query_results: bool,
}

impl ScriptExecutor {
    pub fn new(dialect: &str, parser: StatementParser, settings: &EngineConfig) -> Self {
        Self {
            dialect: dialect.to_string(),
            parser,
            undo: settings.undo,
            batch: settings.batch,
            output_query_results: settings.output_query_results,
        }
    }

    pub fn execute(
        &self,
        sink: &mut dyn StatementSink,
        script: &str,
    ) -> Result<ExecutionSummary, ExecutionError> {
        let statements = self.parser.parse(script);
        let mode = if self.undo { "undo" } else { "migrate" };
        debug!(
            "Executing {} {} statements for dialect {}",
            statements.len(),
            mode,
            self.dialect
        );

        let mut summary = ExecutionSummary::default();
        let mut pending: Vec<&SqlStatement> = Vec::new();

        for statement in &statements {
            if self.batch && statement.kind != StatementKind::Query {
                pending.push(statement);
                continue;
            }
            self.flush_batch(sink, &mut pending, &mut summary)?;
            self.execute_one(sink, statement, &mut summary)?;
        }
        self.flush_batch(sink, &mut pending, &mut summary)?;

        debug!(
            "Executed {} statements ({} batches, {} rows affected)",
            summary.statements, summary.batches, summary.rows_affected
        );
        Ok(summary)
    }

    fn execute_one(
        &self,
        sink: &mut dyn StatementSink,
        statement: &SqlStatement,
        summary: &mut ExecutionSummary,
    ) -> Result<(), ExecutionError> {
        debug!("Executing SQL statement at line {}: {}", statement.line, statement.sql);

        let outcome = sink.execute(&statement.sql).map_err(|message| {
            error!("Statement at line {} failed: {}", statement.line, message);
            ExecutionError::StatementFailed {
                line: statement.line,
                message,
            }
        })?;

        summary.statements += 1;
        match outcome {
            QueryOutcome::Updated(count) => summary.rows_affected += count,
            QueryOutcome::Rows(rows) => {
                if self.output_query_results {
                    for row in &rows {
                        info!("{}", row.join(" | "));
                    }
                    info!("({} rows)", rows.len());
                }
            }
        }
        Ok(())
    }

    fn flush_batch(
        &self,
        sink: &mut dyn StatementSink,
        pending: &mut Vec<&SqlStatement>,
        summary: &mut ExecutionSummary,
    ) -> Result<(), ExecutionError> {
        let Some(first) = pending.first() else {
            return Ok(());
        };
        let line = first.line;
        let count = pending.len();
        let sql: Vec<&str> = pending.iter().map(|s| s.sql.as_str()).collect();

        debug!("Executing batch of {} statements starting at line {}", count, line);
        let updated = sink.execute_batch(&sql).map_err(|message| {
            error!("Batch starting at line {} failed: {}", line, message);
            ExecutionError::BatchFailed {
                line,
                count,
                message,
            }
        })?;

        summary.statements += count;
        summary.batches += 1;
        summary.rows_affected += updated;
        pending.clear();
        Ok(())
    }
}
