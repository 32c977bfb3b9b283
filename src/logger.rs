use crate::model::LoggingConfig;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::io::Write;
use std::str::FromStr;

pub fn setup_logger(verbose: bool, logging: &LoggingConfig) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::from_str(&logging.level).unwrap_or(LevelFilter::Info)
    };
    let pretty = logging.format != "plain";

    let mut builder = Builder::new();
    builder.filter(None, level);
    builder.target(Target::Stdout);

    builder.format(move |buf, record| {
        let prefix = match (pretty, record.level()) {
            (true, Level::Error) => "❌ ",
            (true, Level::Warn) => "⚠️  ",
            (false, Level::Error) => "ERROR ",
            (false, Level::Warn) => "WARN ",
            _ => "",
        };
        writeln!(buf, "{}{}", prefix, record.args())
    });

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }

    // A second initialisation (e.g. in tests) keeps the first logger
    let _ = builder.try_init();
}
