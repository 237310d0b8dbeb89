//! `log` backend that writes to the browser console.
//!
//! Installed once from the module start function. Records at `Error`, `Warn`,
//! `Info` and `Debug` go to the matching console method; `Trace` goes to
//! `console.log`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

/// Default level until JavaScript calls `set_log_level`.
pub(crate) const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug => web_sys::console::debug_1(&message),
            Level::Trace => web_sys::console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Calling this again is a no-op.
pub(crate) fn install(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}", record.target(), record.args())
}

/// Set the log level forwarded to the browser console.
///
/// # Arguments
///
/// * `level` - One of `off`, `error`, `warn`, `info`, `debug`, `trace`
///
/// # Example (TypeScript)
///
/// ```typescript
/// set_log_level('debug');
/// transform_from_rotation(45); // logs the rejected angle, then throws
/// ```
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level)?;
    log::set_max_level(filter);
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("Unknown log level: {level:?}"))
}
