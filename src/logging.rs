#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

const ENGINE_TARGET: &str = "minefield::engine";

/// Writes to stderr. Records from the round resolver get their own
/// threshold, quieter than the rest unless asked for.
struct StderrLogger {
    level: LevelFilter,
    engine: LevelFilter,
}

impl StderrLogger {
    fn threshold(&self, target: &str) -> LevelFilter {
        if target.starts_with(ENGINE_TARGET) {
            self.engine
        } else {
            self.level
        }
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.threshold(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse `MINEFIELD_LOG`: a global level, optionally followed by
/// `,engine=<level>`. Unknown parts are ignored.
fn parse_filters(spec: Option<&str>) -> (LevelFilter, LevelFilter) {
    let mut level = LevelFilter::Warn;
    let mut engine = None;
    for part in spec.unwrap_or("").split(',').map(str::trim) {
        match part.split_once('=') {
            Some(("engine", lvl)) => engine = lvl.parse().ok().or(engine),
            Some(_) => {}
            None => level = part.parse().unwrap_or(level),
        }
    }
    (level, engine.unwrap_or(LevelFilter::Error.min(level)))
}

/// Initialize stderr logging from the `MINEFIELD_LOG` environment variable,
/// e.g. `info` or `info,engine=debug`.
/// Defaults to `warn`, and `error` for the engine, so the interactive game
/// output stays readable.
pub fn init_logging() {
    let spec = env::var("MINEFIELD_LOG").ok();
    let (level, engine) = parse_filters(spec.as_deref());
    let logger = StderrLogger { level, engine };
    let _ = log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level.max(engine)));
}
