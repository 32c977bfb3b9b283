//! Per-dialect SQL collaborators handed to the migration engine.

pub mod database;
pub mod executor;
pub mod parser;

pub use database::DialectDatabase;
pub use executor::{ExecutionError, ExecutionSummary, QueryOutcome, ScriptExecutor, StatementSink};
pub use parser::{SqlStatement, StatementKind, StatementParser};
