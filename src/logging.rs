//! Browser Console Logging
//!
//! `log` backend that writes to the devtools console.
//! Records look like `[wefamily_ui::query] loaded 17 users`.

use log::{Level, LevelFilter, Log, Metadata, Record};

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
        let line = format_record(record.target(), &record.args().to_string());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls only adjust the level.
pub fn init_logging(level: LevelFilter) {
    // Fails only if a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

fn format_record(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

// Native builds (unit tests) have no console object
#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    eprintln!("{:<5} {}", level, line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_prefixes_target() {
        assert_eq!(format_record("wefamily_ui::api", "GET /user/all"), "[wefamily_ui::api] GET /user/all");
    }

    #[test]
    fn test_init_twice_keeps_last_level() {
        init_logging(LevelFilter::Warn);
        init_logging(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
