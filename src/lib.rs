//! Dialect dispatch for schema migration engines.
//!
//! Given a JDBC URL, or the product name a live connection reports, pick the
//! dialect that knows which driver to load, how to split scripts and which
//! connection properties to set.

pub mod cli;
pub mod dialects;
pub mod logger;
pub mod model;
pub mod orchestrator;
pub mod sql;

/// Name this tool reports to database servers
pub const APPLICATION_NAME: &str = "dialect-dispatch";
